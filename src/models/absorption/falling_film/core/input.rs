use uom::si::f64::{MassRate, Ratio, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive, UnitIntervalOpen},
    units::TemperatureDifference,
};

/// Process conditions for one absorber solve.
///
/// The gas flow is guaranteed strictly positive and the target concentration
/// lies in the open interval (0, 1).
///
/// Temperatures are not checked. The gas inlet temperature must stay clear of
/// the equilibrium correlation's singularity near absolute zero, and the
/// cooling water is normally colder than the gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessInputs {
    gas_flow: MassRate,
    gas_temperature: ThermodynamicTemperature,
    target_concentration: Ratio,
    coolant_temperature: ThermodynamicTemperature,
}

impl ProcessInputs {
    /// Constructs validated process inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the gas flow is not strictly positive or the
    /// target concentration is outside (0, 1).
    pub fn new(
        gas_flow: MassRate,
        gas_temperature: ThermodynamicTemperature,
        target_concentration: Ratio,
        coolant_temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(gas_flow)?,
            gas_temperature,
            UnitIntervalOpen::new(target_concentration)?,
            coolant_temperature,
        ))
    }

    /// Constructs process inputs from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        gas_flow: Constrained<MassRate, StrictlyPositive>,
        gas_temperature: ThermodynamicTemperature,
        target_concentration: Constrained<Ratio, UnitIntervalOpen>,
        coolant_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            gas_flow: gas_flow.into_inner(),
            gas_temperature,
            target_concentration: target_concentration.into_inner(),
            coolant_temperature,
        }
    }

    /// Constructs process inputs without validation.
    ///
    /// # Warning
    ///
    /// A zero flow or a target outside (0, 1) produces non-finite
    /// intermediate values, which the solver reports as
    /// [`SolveError::NonFiniteState`](super::SolveError::NonFiniteState).
    #[must_use]
    pub fn new_unchecked(
        gas_flow: MassRate,
        gas_temperature: ThermodynamicTemperature,
        target_concentration: Ratio,
        coolant_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            gas_flow,
            gas_temperature,
            target_concentration,
            coolant_temperature,
        }
    }

    /// Gas mass flow rate.
    #[must_use]
    pub fn gas_flow(&self) -> MassRate {
        self.gas_flow
    }

    /// Gas inlet temperature, also the liquid temperature at the tube top.
    #[must_use]
    pub fn gas_temperature(&self) -> ThermodynamicTemperature {
        self.gas_temperature
    }

    /// Product mass fraction at which the march stops.
    #[must_use]
    pub fn target_concentration(&self) -> Ratio {
        self.target_concentration
    }

    /// Cooling-water inlet temperature.
    #[must_use]
    pub fn coolant_temperature(&self) -> ThermodynamicTemperature {
        self.coolant_temperature
    }

    /// Gas inlet temperature minus cooling-water inlet temperature.
    ///
    /// A non-positive approach means the shell side heats the liquid.
    #[must_use]
    pub fn cooling_approach(&self) -> TemperatureInterval {
        self.gas_temperature.minus(self.coolant_temperature)
    }
}
