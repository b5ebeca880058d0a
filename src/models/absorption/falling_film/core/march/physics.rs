//! Local transfer rates at one axial station.
//!
//! Everything here is a pure function of the current [`MarchState`]. The
//! integrator decides how the rates are turned into a step.

use uom::si::{
    available_energy::joule_per_kilogram, dynamic_viscosity::pascal_second,
    heat_transfer::watt_per_square_meter_kelvin, length::meter, mass_rate::kilogram_per_second,
    molar_mass::kilogram_per_mole, pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::degree_celsius,
};

use crate::models::absorption::falling_film::core::{
    AbsorberConfig, EquilibriumCorrelation, FilmCorrelation, ProcessInputs,
};

use super::{MarchState, SECONDS_PER_HOUR};

const JOULES_PER_KILOJOULE: f64 = 1000.0;

/// Scale applied to the overall coefficient and removed again from the duty.
const CONDUCTANCE_SCALE: f64 = 1000.0;

/// Per-unit-length rates at a station.
///
/// Rates are per meter of tube length across the whole bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LocalRates {
    /// Film heat-transfer coefficient, W/m²·K.
    pub film_coefficient: f64,
    /// Equilibrium back-pressure, Pa.
    pub equilibrium_pressure: f64,
    /// Absorption driving force, Pa. Never negative.
    pub driving_force: f64,
    /// Absorbed-species pickup, kg/h per m.
    pub absorption: f64,
    /// Heat of absorption released, kW per m.
    pub heat_generated: f64,
    /// Heat passed to the cooling water, kW per m.
    pub heat_removed: f64,
    /// Liquid temperature gradient, K per m.
    pub temperature_gradient: f64,
}

/// Constants of the march, unpacked once into native units.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Physics {
    /// Total wetted perimeter of the bundle, m.
    perimeter: f64,
    /// Gas feed, kg/s.
    gas_flow: f64,
    coolant_temperature: f64,
    viscosity: f64,
    system_pressure: f64,
    mass_transfer: f64,
    molar_mass: f64,
    /// kJ/kg.
    heat_of_absorption: f64,
    /// kJ/kg·K.
    specific_heat: f64,
    coolant_resistance: f64,
    wall_resistance: f64,
    film: FilmCorrelation,
    equilibrium: EquilibriumCorrelation,
}

impl Physics {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(inputs: &ProcessInputs, config: &AbsorberConfig, tube_count: usize) -> Self {
        let tube_perimeter = config.geometry.wetted_perimeter().get::<meter>();
        let wall = config.geometry.wall_thickness.get::<meter>()
            / config
                .geometry
                .wall_conductivity
                .get::<watt_per_meter_kelvin>();

        Self {
            perimeter: tube_perimeter * tube_count as f64,
            gas_flow: inputs.gas_flow().get::<kilogram_per_second>(),
            coolant_temperature: inputs.coolant_temperature().get::<degree_celsius>(),
            viscosity: config.liquid.viscosity.get::<pascal_second>(),
            system_pressure: config.transfer.system_pressure.get::<pascal>(),
            mass_transfer: config.transfer.mass_transfer,
            molar_mass: config.transfer.molar_mass.get::<kilogram_per_mole>(),
            heat_of_absorption: config
                .liquid
                .heat_of_absorption
                .get::<joule_per_kilogram>()
                / JOULES_PER_KILOJOULE,
            specific_heat: config
                .liquid
                .specific_heat
                .get::<joule_per_kilogram_kelvin>()
                / JOULES_PER_KILOJOULE,
            coolant_resistance: 1.0
                / config
                    .transfer
                    .coolant_side
                    .get::<watt_per_square_meter_kelvin>(),
            wall_resistance: wall,
            film: config.film,
            equilibrium: config.equilibrium,
        }
    }

    /// Evaluates the local rates at `state`.
    pub(crate) fn rates(&self, state: &MarchState) -> LocalRates {
        let liquid_rate = state.liquid_rate() / SECONDS_PER_HOUR;

        // Film loading and Reynolds number.
        let loading = liquid_rate / self.perimeter;
        let reynolds = 4.0 * loading / self.viscosity;
        let film_coefficient = self.film.watts(reynolds);

        // The gas-side pressure compares the liquid inventory (kg/h) with the
        // gas feed (kg/s); this basis is part of the calibrated correlation.
        let gas_pressure =
            state.absorbed / (state.absorbed + self.gas_flow) * self.system_pressure;
        let equilibrium_pressure = self
            .equilibrium
            .pascals(state.temperature, state.concentration);
        let driving_force = (gas_pressure - equilibrium_pressure).max(0.0);

        let absorbed = self.mass_transfer * driving_force * self.perimeter * self.molar_mass;
        let heat_generated = absorbed * self.heat_of_absorption;

        let overall = 1.0 / (1.0 / film_coefficient + self.coolant_resistance + self.wall_resistance)
            * CONDUCTANCE_SCALE;
        let heat_removed = overall
            * self.perimeter
            * (state.temperature - self.coolant_temperature)
            / CONDUCTANCE_SCALE;

        let temperature_gradient =
            (heat_generated - heat_removed) / (liquid_rate * self.specific_heat);

        LocalRates {
            film_coefficient,
            equilibrium_pressure,
            driving_force,
            absorption: absorbed * SECONDS_PER_HOUR,
            heat_generated,
            heat_removed,
            temperature_gradient,
        }
    }
}
