//! Results of a falling-film absorber solve.

use uom::si::{
    f64::{Area, Length, Power, Ratio, ThermodynamicTemperature},
    length::meter,
    power::kilowatt,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use super::{Sizing, TubeGeometry, march::MarchOutcome};

/// Why the march stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The liquid reached the target concentration at this station (1-based).
    TargetReached { step: usize },

    /// The step budget ran out before the target was reached.
    ///
    /// The returned profile describes the longest tube the march explored;
    /// its final concentration is below the target.
    StepBudgetExhausted,
}

impl Termination {
    /// Returns `true` if the target concentration was reached.
    #[must_use]
    pub fn converged(&self) -> bool {
        matches!(self, Self::TargetReached { .. })
    }
}

/// One axial station of the profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Distance from the tube top.
    pub position: Length,
    pub temperature: ThermodynamicTemperature,
    pub concentration: Ratio,
    /// Heat passed to the cooling water over the step ending here.
    pub heat_removed: Power,
}

/// Axial profiles recorded during the march.
///
/// The four sequences always have equal length, and index `i` in each refers
/// to the same station, in march order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    positions: Vec<Length>,
    temperatures: Vec<ThermodynamicTemperature>,
    concentrations: Vec<Ratio>,
    heat_removed: Vec<Power>,
}

impl Profile {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            temperatures: Vec::with_capacity(capacity),
            concentrations: Vec::with_capacity(capacity),
            heat_removed: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, station: Station) {
        self.positions.push(station.position);
        self.temperatures.push(station.temperature);
        self.concentrations.push(station.concentration);
        self.heat_removed.push(station.heat_removed);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> &[Length] {
        &self.positions
    }

    #[must_use]
    pub fn temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }

    #[must_use]
    pub fn concentrations(&self) -> &[Ratio] {
        &self.concentrations
    }

    /// Liquid concentration at each station, in percent.
    #[must_use]
    pub fn concentration_percent(&self) -> Vec<f64> {
        self.concentrations
            .iter()
            .map(|c| c.get::<percent>())
            .collect()
    }

    /// Heat removed over each step.
    #[must_use]
    pub fn heat_removed(&self) -> &[Power] {
        &self.heat_removed
    }

    /// Returns the station at `index`, if any.
    #[must_use]
    pub fn station(&self, index: usize) -> Option<Station> {
        Some(Station {
            position: *self.positions.get(index)?,
            temperature: self.temperatures[index],
            concentration: self.concentrations[index],
            heat_removed: self.heat_removed[index],
        })
    }

    /// Iterates over the stations in march order.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        (0..self.len()).filter_map(|i| self.station(i))
    }

    /// Highest liquid temperature recorded.
    #[must_use]
    pub fn peak_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.temperatures
            .iter()
            .copied()
            .reduce(|peak, t| if t > peak { t } else { peak })
    }
}

/// Tube count, required length, heat duty, and axial profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub sizing: Sizing,

    /// Tube length marched, the required length when converged.
    pub length: Length,

    /// Total heat passed to the cooling water.
    pub heat_duty: Power,

    /// Highest liquid temperature along the profile.
    pub peak_temperature: ThermodynamicTemperature,

    pub profile: Profile,

    pub termination: Termination,
}

impl SolveResult {
    /// Packages a finished march.
    pub(super) fn new(sizing: Sizing, outcome: MarchOutcome) -> Self {
        let peak_temperature = outcome.profile.peak_temperature().unwrap_or_else(|| {
            ThermodynamicTemperature::new::<degree_celsius>(outcome.final_state.temperature)
        });

        Self {
            sizing,
            length: Length::new::<meter>(outcome.final_state.position),
            heat_duty: Power::new::<kilowatt>(outcome.final_state.heat_removed),
            peak_temperature,
            profile: outcome.profile,
            termination: outcome.termination,
        }
    }

    #[must_use]
    pub fn tube_count(&self) -> usize {
        self.sizing.tube_count
    }

    /// Returns `true` if the target concentration was reached.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination.converged()
    }

    /// Liquid concentration at the last station.
    #[must_use]
    pub fn final_concentration(&self) -> Ratio {
        self.profile
            .concentrations()
            .last()
            .copied()
            .unwrap_or(Ratio::new::<ratio>(0.0))
    }

    /// Wetted area of the whole bundle over the marched length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn heat_transfer_area(&self, geometry: &TubeGeometry) -> Area {
        geometry.wetted_perimeter() * self.length * self.sizing.tube_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn station(z: f64, t: f64, c: f64) -> Station {
        Station {
            position: Length::new::<meter>(z),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
            concentration: Ratio::new::<ratio>(c),
            heat_removed: Power::new::<kilowatt>(1.0),
        }
    }

    #[test]
    fn sequences_stay_aligned() {
        let mut profile = Profile::with_capacity(3);
        profile.push(station(0.1, 40.0, 0.10));
        profile.push(station(0.2, 65.0, 0.18));
        profile.push(station(0.3, 55.0, 0.24));

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.positions().len(), profile.heat_removed().len());
        assert_eq!(profile.stations().count(), 3);
        assert_eq!(profile.station(1), Some(station(0.2, 65.0, 0.18)));
        assert_eq!(profile.station(3), None);

        let percents = profile.concentration_percent();
        assert_relative_eq!(percents[2], 24.0, max_relative = 1e-12);
    }

    #[test]
    fn peak_temperature_is_profile_maximum() {
        let mut profile = Profile::default();
        assert_eq!(profile.peak_temperature(), None);

        profile.push(station(0.1, 40.0, 0.10));
        profile.push(station(0.2, 65.0, 0.18));
        profile.push(station(0.3, 55.0, 0.24));

        assert_relative_eq!(
            profile.peak_temperature().unwrap().get::<degree_celsius>(),
            65.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn heat_transfer_area_covers_whole_bundle() {
        use std::f64::consts::PI;
        use uom::si::{area::square_meter, f64::MassRate, mass_rate::kilogram_per_second};

        use crate::models::absorption::falling_film::core::AbsorberConfig;

        let config = AbsorberConfig::default();
        let sizing = Sizing::new(
            MassRate::new::<kilogram_per_second>(2500.0 / 3600.0),
            &config,
        );
        let result = SolveResult {
            sizing,
            length: Length::new::<meter>(0.2),
            heat_duty: Power::new::<kilowatt>(0.0),
            peak_temperature: ThermodynamicTemperature::new::<degree_celsius>(10.0),
            profile: Profile::default(),
            termination: Termination::StepBudgetExhausted,
        };

        assert_relative_eq!(
            result.heat_transfer_area(&config.geometry).get::<square_meter>(),
            PI * 0.02 * 0.2 * 58.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.final_concentration().get::<ratio>(), 0.0);
    }

    #[test]
    fn termination_reports_convergence() {
        assert!(Termination::TargetReached { step: 3 }.converged());
        assert!(!Termination::StepBudgetExhausted.converged());
    }
}
