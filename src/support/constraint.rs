//! Numeric constraints checked once, at construction.
//!
//! Process inputs and configuration values carry simple numeric invariants:
//! a gas flow must be strictly positive, a target mass fraction must lie
//! strictly between zero and one. Wrapping such values in
//! [`Constrained<T, C>`] moves the check to the boundary so the solver core
//! can rely on the invariant without re-validating it.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalOpen`]: Open unit interval `0 < x < 1`
//!
//! Both markers work with plain floats and with [`uom`] quantities.
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for a zero-sized marker type to add a new
//! invariant.

mod strictly_positive;
mod unit_interval_open;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval_open::{UnitBounds, UnitIntervalOpen};

/// A numeric invariant enforced when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_absorption::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// let gas_flow = MassRate::new::<kilogram_per_second>(0.7);
/// let gas_flow = Constrained::<_, StrictlyPositive>::new(gas_flow).unwrap();
/// assert_eq!(gas_flow.into_inner().get::<kilogram_per_second>(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
