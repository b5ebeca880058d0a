use uom::si::{
    f64::{Length, Power, Ratio, ThermodynamicTemperature},
    length::meter,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::models::absorption::falling_film::core::{AbsorberConfig, ProcessInputs, Station};

use super::SECONDS_PER_HOUR;

/// Liquid state carried down the tube, in native units.
///
/// Inventories are liquid flow rates in kg/h, temperature is in °C,
/// position is in meters and heat is in kW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MarchState {
    pub temperature: f64,
    pub concentration: f64,
    pub absorbed: f64,
    pub solvent: f64,
    pub position: f64,
    pub heat_removed: f64,
}

/// Change of the liquid state over one axial step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StepChange {
    pub temperature: f64,
    pub absorbed: f64,
    pub heat_removed: f64,
}

impl MarchState {
    /// State at the tube top.
    ///
    /// The solvent rate follows from the overall balance at the target
    /// concentration: all absorbable gas leaves in a product at exactly the
    /// target strength. The liquid starts at the seed concentration.
    pub(crate) fn initial(inputs: &ProcessInputs, config: &AbsorberConfig) -> Self {
        let gas_flow = inputs.gas_flow().get::<kilogram_per_second>() * SECONDS_PER_HOUR;
        let target = inputs.target_concentration().get::<ratio>();
        let seed = config.march.seed_concentration.get::<ratio>();

        let absorbable = gas_flow * config.feed.absorbable_fraction.get::<ratio>();
        let product = absorbable / target;
        let solvent = product * (1.0 - target);

        Self {
            temperature: inputs.gas_temperature().get::<degree_celsius>(),
            concentration: seed,
            absorbed: (solvent * seed) / (1.0 - seed),
            solvent,
            position: 0.0,
            heat_removed: 0.0,
        }
    }

    /// Total liquid flow rate in kg/h.
    pub(crate) fn liquid_rate(&self) -> f64 {
        self.solvent + self.absorbed
    }

    /// Applies one step and moves the state to `position`.
    pub(crate) fn apply(&mut self, change: &StepChange, position: f64) {
        self.temperature += change.temperature;
        self.absorbed += change.absorbed;
        self.concentration = self.absorbed / (self.absorbed + self.solvent);
        self.position = position;
        self.heat_removed += change.heat_removed;
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.temperature.is_finite() && self.concentration.is_finite()
    }

    /// Profile sample for the current position.
    pub(crate) fn station(&self, heat_removed: f64) -> Station {
        Station {
            position: Length::new::<meter>(self.position),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(self.temperature),
            concentration: Ratio::new::<ratio>(self.concentration),
            heat_removed: Power::new::<kilowatt>(heat_removed),
        }
    }
}
