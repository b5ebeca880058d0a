//! Extensions to [`uom`].
//!
//! All public quantities in this crate are [`uom`] quantities. This module
//! holds the small additions the absorber needs on top of them.
//!
//! ## Temperature differences
//!
//! [`uom`] does not let one [`ThermodynamicTemperature`] be subtracted from
//! another to give a [`TemperatureInterval`]. The [`TemperatureDifference`]
//! trait fills that gap:
//!
//! ```
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//! use twine_absorption::support::units::TemperatureDifference;
//!
//! let gas = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let coolant = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let approach = gas.minus(coolant);
//! assert!((approach.get::<kelvin>() - 15.0).abs() < 1e-9);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
