use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the interval endpoints 0 and 1 for a type.
///
/// Implemented for `f64` and `uom::si::f64::Ratio`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker for values in the open unit interval `0 < x < 1`.
///
/// Mass fractions that appear in a denominator as `x` or `1 - x` (product
/// targets, seed concentrations) use this constraint.
///
/// # Examples
///
/// ```
/// use twine_absorption::support::constraint::UnitIntervalOpen;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let target = UnitIntervalOpen::new(Ratio::new::<percent>(32.0)).unwrap();
/// assert!((target.as_ref().get::<ratio>() - 0.32).abs() < 1e-15);
///
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Wraps `value` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if `value <= 0`.
    /// - [`ConstraintError::AboveMaximum`] if `value >= 1`.
    /// - [`ConstraintError::NotANumber`] if the value cannot be compared.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
