//! Fixed-step march down the tube.
//!
//! Starting from the tube top, the liquid temperature and concentration are
//! advanced one station at a time. The march stops at the first station whose
//! concentration reaches the target, or when the step budget runs out.

mod integrator;
mod physics;
mod state;

pub(crate) use integrator::{ForwardEuler, Integrator};
pub(crate) use physics::Physics;
pub(crate) use state::{MarchState, StepChange};

use log::debug;
use uom::si::{length::meter, ratio::ratio, thermodynamic_temperature::degree_celsius};

use super::{AbsorberConfig, ProcessInputs, Profile, Sizing, SolveError, Termination};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Raw outcome of a march, before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MarchOutcome {
    pub profile: Profile,
    pub final_state: MarchState,
    pub termination: Termination,
}

/// Marches the liquid film down the tube bundle.
///
/// # Errors
///
/// Returns [`SolveError::NonFiniteState`] if the liquid temperature or
/// concentration stops being finite.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn march(
    inputs: &ProcessInputs,
    config: &AbsorberConfig,
    sizing: &Sizing,
    integrator: &impl Integrator,
) -> Result<MarchOutcome, SolveError> {
    let physics = Physics::new(inputs, config, sizing.tube_count);
    let step_length = config.march.step_length.get::<meter>();
    let target = inputs.target_concentration().get::<ratio>();

    let mut state = MarchState::initial(inputs, config);
    let mut profile = Profile::with_capacity(config.march.steps);
    let mut termination = Termination::StepBudgetExhausted;

    for step in 1..=config.march.steps {
        let change = integrator.step(&physics, &state, step_length);
        state.apply(&change, step_length * step as f64);

        if !state.is_finite() {
            return Err(SolveError::non_finite(step, &state));
        }

        debug!(
            "station {step}: z={:.2} m, T={:.2} °C, C={:.4}, q={:.3} kW",
            state.position, state.temperature, state.concentration, change.heat_removed
        );
        profile.push(state.station(change.heat_removed));

        if state.concentration >= target {
            termination = Termination::TargetReached { step };
            break;
        }
    }

    Ok(MarchOutcome {
        profile,
        final_state: state,
        termination,
    })
}

impl SolveError {
    fn non_finite(step: usize, state: &MarchState) -> Self {
        use uom::si::f64::{Ratio, ThermodynamicTemperature};

        Self::NonFiniteState {
            step,
            temperature: ThermodynamicTemperature::new::<degree_celsius>(state.temperature),
            concentration: Ratio::new::<ratio>(state.concentration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassRate, Ratio},
        mass_rate::kilogram_per_second,
    };

    use crate::models::absorption::falling_film::core::test_support::{
        celsius, init_logging, kg_per_hour, reference_inputs,
    };

    fn run(inputs: &ProcessInputs) -> MarchOutcome {
        init_logging();
        let config = AbsorberConfig::default();
        let sizing = Sizing::new(inputs.gas_flow(), &config);
        march(inputs, &config, &sizing, &ForwardEuler).expect("march should stay finite")
    }

    /// Advances position only.
    struct Frozen;

    impl Integrator for Frozen {
        fn step(&self, _physics: &Physics, _state: &MarchState, _step_length: f64) -> StepChange {
            StepChange {
                temperature: 0.0,
                absorbed: 0.0,
                heat_removed: 0.0,
            }
        }
    }

    #[test]
    fn reference_case_reaches_target_in_two_steps() {
        let outcome = run(&reference_inputs());

        assert_eq!(outcome.termination, Termination::TargetReached { step: 2 });
        assert_eq!(outcome.profile.len(), 2);

        let first = outcome.profile.station(0).unwrap();
        assert_relative_eq!(
            first.temperature.get::<degree_celsius>(),
            872.761_750_294_653_8,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            first.concentration.get::<ratio>(),
            0.280_962_802_286_132_67,
            max_relative = 1e-9
        );

        let second = outcome.profile.station(1).unwrap();
        assert_relative_eq!(
            second.concentration.get::<ratio>(),
            0.369_294_970_268_136_14,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            second.temperature.get::<degree_celsius>(),
            -20_021.612_577_301_188,
            max_relative = 1e-6
        );
    }

    #[test]
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    fn positions_are_exact_multiples_of_step_length() {
        let outcome = run(&ProcessInputs::new(
            kg_per_hour(1000.0),
            celsius(40.0),
            Ratio::new::<ratio>(0.30),
            celsius(25.0),
        )
        .unwrap());

        for (i, z) in outcome.profile.positions().iter().enumerate() {
            assert_eq!(z.get::<meter>(), 0.1 * (i + 1) as f64);
        }
    }

    #[test]
    fn stops_at_first_station_reaching_target() {
        let inputs = reference_inputs();
        let target = inputs.target_concentration();
        let outcome = run(&inputs);

        let (last, earlier) = outcome.profile.concentrations().split_last().unwrap();
        assert!(*last >= target);
        assert!(earlier.iter().all(|c| *c < target));
    }

    #[test]
    fn seed_strength_target_stops_after_one_step() {
        let outcome = run(&ProcessInputs::new(
            kg_per_hour(2500.0),
            celsius(10.0),
            Ratio::new::<ratio>(0.05),
            celsius(32.0),
        )
        .unwrap());

        assert_eq!(outcome.termination, Termination::TargetReached { step: 1 });
        assert_eq!(outcome.profile.len(), 1);
    }

    #[test]
    fn unreachable_target_exhausts_budget() {
        let outcome = run(&ProcessInputs::new(
            kg_per_hour(1000.0),
            celsius(40.0),
            Ratio::new::<ratio>(0.30),
            celsius(25.0),
        )
        .unwrap());

        assert_eq!(outcome.termination, Termination::StepBudgetExhausted);
        assert_eq!(outcome.profile.len(), 60);
        assert_relative_eq!(outcome.final_state.position, 6.0, max_relative = 1e-12);
        assert_relative_eq!(
            outcome.final_state.concentration,
            0.263_622_019_510_294_6,
            max_relative = 1e-9
        );
    }

    #[test]
    fn concentration_never_decreases() {
        for (flow, gas, target, coolant) in [
            (2500.0, 10.0, 0.32, 32.0),
            (1000.0, 40.0, 0.30, 25.0),
            (2500.0, 10.0, 0.60, 32.0),
            (400.0, 20.0, 0.25, 15.0),
        ] {
            let outcome = run(&ProcessInputs::new(
                kg_per_hour(flow),
                celsius(gas),
                Ratio::new::<ratio>(target),
                celsius(coolant),
            )
            .unwrap());

            let concentrations = outcome.profile.concentrations();
            assert!(concentrations.len() <= 60);
            assert!(
                concentrations.windows(2).all(|pair| pair[0] <= pair[1]),
                "concentration fell for inputs {flow}, {gas}, {target}, {coolant}"
            );
        }
    }

    #[test]
    fn integrator_can_be_swapped() {
        init_logging();
        let inputs = reference_inputs();
        let config = AbsorberConfig::default();
        let sizing = Sizing::new(inputs.gas_flow(), &config);

        let outcome = march(&inputs, &config, &sizing, &Frozen).unwrap();

        assert_eq!(outcome.termination, Termination::StepBudgetExhausted);
        assert_eq!(outcome.profile.len(), config.march.steps);
        assert!(
            outcome
                .profile
                .temperatures()
                .iter()
                .all(|t| (t.get::<degree_celsius>() - 10.0).abs() < 1e-9)
        );
    }

    #[test]
    fn zero_flow_is_reported_as_non_finite() {
        init_logging();
        let inputs = ProcessInputs::new_unchecked(
            MassRate::new::<kilogram_per_second>(0.0),
            celsius(10.0),
            Ratio::new::<ratio>(0.32),
            celsius(32.0),
        );
        let config = AbsorberConfig::default();
        let sizing = Sizing::new(inputs.gas_flow(), &config);

        let result = march(&inputs, &config, &sizing, &ForwardEuler);
        assert!(matches!(
            result,
            Err(SolveError::NonFiniteState { step: 1, .. })
        ));
    }
}
