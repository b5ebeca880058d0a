//! Falling-film absorber solver.
//!
//! A solve runs in two stages:
//!
//! 1. **Sizing**: the tube count that keeps the superficial gas velocity at
//!    or below its design value.
//! 2. **March**: a fixed-step integration of liquid temperature and
//!    concentration down the tubes, stopping once the liquid reaches the
//!    target concentration.
//!
//! Physical constants and correlation coefficients are supplied through
//! [`AbsorberConfig`].

mod config;
mod correlations;
mod error;
mod input;
mod march;
mod results;
mod sizing;

#[cfg(test)]
mod test_support;

pub use config::{
    AbsorberConfig, ConfigError, FeedGas, Hydraulics, LiquidProperties, MarchConfig,
    TransferCoefficients, TubeGeometry,
};
pub use correlations::{EquilibriumCorrelation, FilmCorrelation};
pub use error::SolveError;
pub use input::ProcessInputs;
pub use results::{Profile, SolveResult, Station, Termination};
pub use sizing::Sizing;

use log::{info, warn};
use uom::{
    ConstZero,
    si::{
        f64::TemperatureInterval, length::meter, power::kilowatt, ratio::ratio,
        velocity::meter_per_second,
    },
};

use march::{ForwardEuler, Integrator, march};

/// Sizes the bundle and marches the film to the target concentration.
///
/// # Errors
///
/// Returns [`SolveError::Config`] if `config` fails validation and
/// [`SolveError::NonFiniteState`] if the march leaves the finite range.
pub fn solve(inputs: &ProcessInputs, config: &AbsorberConfig) -> Result<SolveResult, SolveError> {
    solve_with(inputs, config, &ForwardEuler)
}

/// Solves with a specific integrator.
pub(crate) fn solve_with(
    inputs: &ProcessInputs,
    config: &AbsorberConfig,
    integrator: &impl Integrator,
) -> Result<SolveResult, SolveError> {
    config.validate()?;
    solve_validated_with(inputs, config, integrator)
}

/// Solves with a configuration the caller has already validated.
pub(crate) fn solve_validated(
    inputs: &ProcessInputs,
    config: &AbsorberConfig,
) -> Result<SolveResult, SolveError> {
    solve_validated_with(inputs, config, &ForwardEuler)
}

fn solve_validated_with(
    inputs: &ProcessInputs,
    config: &AbsorberConfig,
    integrator: &impl Integrator,
) -> Result<SolveResult, SolveError> {
    if inputs.cooling_approach() <= TemperatureInterval::ZERO {
        warn!(
            "cooling water is not colder than the gas inlet (approach {:?}); the shell side will heat the film",
            inputs.cooling_approach()
        );
    }

    let sizing = Sizing::new(inputs.gas_flow(), config);
    info!(
        "sized bundle: {} tubes at {:.2} m/s",
        sizing.tube_count,
        sizing.gas_velocity.get::<meter_per_second>()
    );

    let outcome = march(inputs, config, &sizing, integrator)?;
    let result = SolveResult::new(sizing, outcome);

    match result.termination {
        Termination::TargetReached { step } => info!(
            "target reached at station {step}: L={:.2} m, duty={:.2} kW",
            result.length.get::<meter>(),
            result.heat_duty.get::<kilowatt>()
        ),
        Termination::StepBudgetExhausted => warn!(
            "target {:.4} not reached within {} steps; final concentration {:.4}",
            inputs.target_concentration().get::<ratio>(),
            config.march.steps,
            result.final_concentration().get::<ratio>()
        ),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Ratio, thermodynamic_temperature::degree_celsius};

    use test_support::{celsius, init_logging, kg_per_hour, reference_inputs};

    #[test]
    fn reference_scenario() {
        init_logging();
        let result = solve(&reference_inputs(), &AbsorberConfig::default()).unwrap();

        assert_eq!(result.tube_count(), 58);
        assert!(result.converged());
        assert!(!result.profile.is_empty() && result.profile.len() <= 60);
        assert!(result.final_concentration().get::<ratio>() >= 0.32);
        assert_relative_eq!(result.length.get::<meter>(), 0.2, max_relative = 1e-12);

        assert!(result.peak_temperature > celsius(10.0));
        assert_relative_eq!(
            result.peak_temperature.get::<degree_celsius>(),
            872.761_750_294_653_8,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            result.heat_duty.get::<kilowatt>(),
            117_780.412_252_443_44,
            max_relative = 1e-6
        );
    }

    #[test]
    fn heat_duty_is_sum_of_station_duties() {
        init_logging();
        let result = solve(&reference_inputs(), &AbsorberConfig::default()).unwrap();

        let sum: f64 = result
            .profile
            .heat_removed()
            .iter()
            .map(|q| q.get::<kilowatt>())
            .sum();
        assert_relative_eq!(result.heat_duty.get::<kilowatt>(), sum, max_relative = 1e-12);
    }

    #[test]
    fn under_convergence_is_reported_not_raised() {
        init_logging();
        let inputs = ProcessInputs::new(
            kg_per_hour(1000.0),
            celsius(40.0),
            Ratio::new::<ratio>(0.30),
            celsius(25.0),
        )
        .unwrap();

        let result = solve(&inputs, &AbsorberConfig::default()).unwrap();

        assert_eq!(result.termination, Termination::StepBudgetExhausted);
        assert!(!result.converged());
        assert_eq!(result.tube_count(), 23);
        assert_eq!(result.profile.len(), 60);
        assert!(result.final_concentration() < inputs.target_concentration());
    }

    #[test]
    fn repeated_solves_are_identical() {
        init_logging();
        let config = AbsorberConfig::default();
        let inputs = ProcessInputs::new(
            kg_per_hour(2500.0),
            celsius(10.0),
            Ratio::new::<ratio>(0.60),
            celsius(32.0),
        )
        .unwrap();

        let first = solve(&inputs, &config).unwrap();
        let second = solve(&inputs, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_config_is_rejected_before_marching() {
        init_logging();
        let mut config = AbsorberConfig::default();
        config.march.steps = 0;

        let result = solve(&reference_inputs(), &config);
        assert!(matches!(
            result,
            Err(SolveError::Config(ConfigError::NoSteps))
        ));
    }

    #[test]
    fn shorter_budget_truncates_profile() {
        init_logging();
        let mut config = AbsorberConfig::default();
        config.march.steps = 5;

        let inputs = ProcessInputs::new(
            kg_per_hour(1000.0),
            celsius(40.0),
            Ratio::new::<ratio>(0.30),
            celsius(25.0),
        )
        .unwrap();
        let result = solve(&inputs, &config).unwrap();

        assert_eq!(result.profile.len(), 5);
        assert_relative_eq!(result.length.get::<meter>(), 0.5, max_relative = 1e-12);
    }
}
