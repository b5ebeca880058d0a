//! # Twine Absorption
//!
//! Falling-film gas absorber models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Constraint types and [`uom`] extensions used by the models.
//!
//! ## Quick start
//!
//! ```
//! use twine_absorption::models::absorption::falling_film::{
//!     FallingFilmAbsorber, ProcessInputs,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{MassRate, Ratio, ThermodynamicTemperature},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let inputs = ProcessInputs::new(
//!     MassRate::new::<kilogram_per_second>(2500.0 / 3600.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(10.0),
//!     Ratio::new::<ratio>(0.32),
//!     ThermodynamicTemperature::new::<degree_celsius>(32.0),
//! )?;
//!
//! let result = FallingFilmAbsorber::default().call(&inputs)?;
//! println!(
//!     "{} tubes, {:.1} m",
//!     result.tube_count(),
//!     result.length.get::<meter>()
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Logging
//!
//! Solves emit records through the [`log`] facade: sizing and termination at
//! `info`, per-station state at `debug`, and suspicious operating points at
//! `warn`. Install any `log` backend to see them.
//!
//! ## Stability
//!
//! Modules in [`support`] are public because they're useful alongside the
//! models, but their APIs are not stable. Model-specific utility code stays
//! private to each model's `core` module.

pub mod models;
pub mod support;
