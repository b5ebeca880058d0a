use super::{MarchState, Physics, StepChange};

/// Turns local rates into one axial step.
///
/// The march calls [`Integrator::step`] once per station with a fixed step
/// length. Implementations must not move the state themselves.
pub(crate) trait Integrator {
    fn step(&self, physics: &Physics, state: &MarchState, step_length: f64) -> StepChange;
}

/// Explicit forward Euler: rates at the top of the step, held across it.
///
/// No stability control is applied.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, physics: &Physics, state: &MarchState, step_length: f64) -> StepChange {
        let rates = physics.rates(state);
        StepChange {
            temperature: rates.temperature_gradient * step_length,
            absorbed: rates.absorption * step_length,
            heat_removed: rates.heat_removed * step_length,
        }
    }
}
