//! Empirical correlations used by the march.
//!
//! Each correlation is a plain coefficient table with an evaluation method,
//! so alternate fluids can be modeled by swapping coefficients without
//! touching the march itself.

use uom::si::{
    f64::{HeatTransfer, Pressure, Ratio, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Vapor pressure of the absorbed species over the liquid film.
///
/// Evaluates
///
/// ```text
/// ln p = a - b / (T + kelvin_offset) + exponent * ln(C)
/// ```
///
/// with `T` in °C and `C` the liquid mass fraction, then converts `p` from
/// the correlation's native unit to pascals with `pascal_per_unit`.
///
/// Below `dilute_limit` the back-pressure is taken as exactly zero, which
/// also keeps `ln(C)` away from its singularity at `C = 0`.
///
/// # Preconditions
///
/// `T + kelvin_offset` must not be zero. This is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumCorrelation {
    pub a: f64,
    pub b: f64,
    pub exponent: f64,
    pub kelvin_offset: f64,
    pub dilute_limit: f64,
    pub pascal_per_unit: f64,
}

impl Default for EquilibriumCorrelation {
    /// HCl over aqueous hydrochloric acid, native unit mmHg.
    fn default() -> Self {
        Self {
            a: 10.5,
            b: 2500.0,
            exponent: 2.0,
            kelvin_offset: 273.0,
            dilute_limit: 0.01,
            pascal_per_unit: 133.322,
        }
    }
}

impl EquilibriumCorrelation {
    /// Returns the equilibrium partial pressure over a liquid at
    /// `temperature` holding mass fraction `concentration`.
    #[must_use]
    pub fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        concentration: Ratio,
    ) -> Pressure {
        Pressure::new::<pascal>(self.pascals(
            temperature.get::<degree_celsius>(),
            concentration.get::<ratio>(),
        ))
    }

    /// Evaluates the correlation on native values (°C, mass fraction).
    pub(super) fn pascals(&self, temperature: f64, concentration: f64) -> f64 {
        if concentration < self.dilute_limit {
            return 0.0;
        }
        let log_p = self.a - self.b / (temperature + self.kelvin_offset)
            + self.exponent * concentration.ln();
        log_p.exp() * self.pascal_per_unit
    }
}

/// Heat-transfer coefficient of the falling liquid film.
///
/// `h = max(floor, coefficient * Re^exponent)`, where `Re` is the film
/// Reynolds number. The floor bounds `h` from below at low loadings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmCorrelation {
    pub coefficient: f64,
    pub exponent: f64,
    pub floor: HeatTransfer,
}

impl Default for FilmCorrelation {
    fn default() -> Self {
        Self {
            coefficient: 1200.0,
            exponent: -1.0 / 3.0,
            floor: HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0),
        }
    }
}

impl FilmCorrelation {
    /// Returns the film coefficient at film Reynolds number `reynolds`.
    #[must_use]
    pub fn heat_transfer(&self, reynolds: f64) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.watts(reynolds))
    }

    /// Film coefficient in W/m²·K.
    pub(super) fn watts(&self, reynolds: f64) -> f64 {
        let floor = self.floor.get::<watt_per_square_meter_kelvin>();
        (self.coefficient * reynolds.powf(self.exponent)).max(floor)
    }
}
