use thiserror::Error;
use uom::si::f64::{Ratio, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

use super::ConfigError;

/// Errors that can occur while solving a falling-film absorber.
///
/// Missing the target concentration within the step budget is not an
/// error; see [`Termination`](super::Termination).
#[derive(Debug, Error)]
pub enum SolveError {
    /// A process input violated its constraint.
    #[error("invalid process input")]
    Input(#[from] ConstraintError),

    /// The absorber configuration failed validation.
    #[error("invalid absorber configuration")]
    Config(#[from] ConfigError),

    /// The liquid state stopped being finite during the march.
    ///
    /// This typically follows from unchecked inputs (zero flow) or from an
    /// explicit step that overshoots far enough to overflow.
    #[error("liquid state became non-finite at step {step}: T={temperature:?}, C={concentration:?}")]
    NonFiniteState {
        /// Station index (1-based) where the state was first non-finite.
        step: usize,
        temperature: ThermodynamicTemperature,
        concentration: Ratio,
    },
}
