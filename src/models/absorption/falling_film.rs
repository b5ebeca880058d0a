//! Falling-film gas absorber.
//!
//! A soluble gas flows down the inside of vertical tubes alongside a thin
//! liquid film, which absorbs it while cooling water on the shell side
//! carries away the heat of absorption. Given a feed gas flow and a target
//! liquid concentration, the model sizes the tube bundle and marches the
//! film down the tubes to find the required length, the heat duty, and the
//! axial temperature and concentration profiles.
//!
//! [`FallingFilmAbsorber`] is the [`twine_core::Model`] adapter; the
//! computation itself lives in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_absorption::models::absorption::falling_film::FallingFilmAbsorber;
//! use uom::si::{
//!     f64::{MassRate, Ratio, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let absorber = FallingFilmAbsorber::default();
//! let result = absorber
//!     .solve(
//!         MassRate::new::<kilogram_per_second>(2500.0 / 3600.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(10.0),
//!         Ratio::new::<ratio>(0.32),
//!         ThermodynamicTemperature::new::<degree_celsius>(32.0),
//!     )
//!     .unwrap();
//!
//! assert_eq!(result.tube_count(), 58);
//! assert!(result.converged());
//! ```

mod core;

pub use self::core::{
    AbsorberConfig, ConfigError, EquilibriumCorrelation, FeedGas, FilmCorrelation, Hydraulics,
    LiquidProperties, MarchConfig, ProcessInputs, Profile, SolveError, SolveResult, Sizing,
    Station, Termination, TransferCoefficients, TubeGeometry,
};

use twine_core::Model;
use uom::si::f64::{MassRate, Pressure, Ratio, ThermodynamicTemperature};

/// Falling-film absorber with a fixed configuration.
///
/// The configuration is validated once on construction, so every call only
/// needs to check the process inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallingFilmAbsorber {
    config: AbsorberConfig,
}

impl FallingFilmAbsorber {
    /// Creates an absorber with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any configuration value is out of range.
    pub fn new(config: AbsorberConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Validated configuration used for every solve.
    #[must_use]
    pub fn config(&self) -> &AbsorberConfig {
        &self.config
    }

    /// Sizes and solves the absorber for one operating point.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Input`] if the gas flow is not strictly
    /// positive or the target is outside (0, 1), and
    /// [`SolveError::NonFiniteState`] if the march diverges.
    pub fn solve(
        &self,
        gas_flow: MassRate,
        gas_temperature: ThermodynamicTemperature,
        target_concentration: Ratio,
        coolant_temperature: ThermodynamicTemperature,
    ) -> Result<SolveResult, SolveError> {
        let inputs = ProcessInputs::new(
            gas_flow,
            gas_temperature,
            target_concentration,
            coolant_temperature,
        )?;
        self::core::solve_validated(&inputs, &self.config)
    }

    /// Equilibrium partial pressure of the absorbed species over the film.
    #[must_use]
    pub fn equilibrium_pressure(
        &self,
        temperature: ThermodynamicTemperature,
        concentration: Ratio,
    ) -> Pressure {
        self.config.equilibrium.pressure(temperature, concentration)
    }
}

impl Model for FallingFilmAbsorber {
    type Input = ProcessInputs;
    type Output = SolveResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve_validated(input, &self.config)
    }
}
