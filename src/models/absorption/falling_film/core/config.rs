//! Physical constants and march settings for the absorber.
//!
//! [`AbsorberConfig::default`] reproduces the reference HCl/graphite-tube
//! design. Every constant the march reads lives here so alternate fluids or
//! geometries can be modeled without editing the solver.

use std::f64::consts::PI;

use num_traits::Zero;
use thiserror::Error;
use uom::si::{
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        Area, AvailableEnergy, DynamicViscosity, HeatTransfer, Length, MassDensity, MolarMass,
        Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity, Velocity,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    molar_mass::{gram_per_mole, kilogram_per_mole},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::constraint::{StrictlyPositive, UnitIntervalOpen};

use super::{EquilibriumCorrelation, FilmCorrelation};

/// Complete parameter set for a falling-film absorber solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AbsorberConfig {
    pub feed: FeedGas,
    pub geometry: TubeGeometry,
    pub hydraulics: Hydraulics,
    pub liquid: LiquidProperties,
    pub transfer: TransferCoefficients,
    pub film: FilmCorrelation,
    pub equilibrium: EquilibriumCorrelation,
    pub march: MarchConfig,
}

/// Errors from [`AbsorberConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("march must take at least one step")]
    NoSteps,
    #[error("invalid step length: {step_length:?}")]
    StepLength { step_length: Length },
    #[error("invalid seed concentration: {seed:?}")]
    SeedConcentration { seed: Ratio },
    #[error("invalid absorbable mass fraction: {fraction:?}")]
    AbsorbableFraction { fraction: Ratio },
    #[error("{name} must be strictly positive")]
    NotPositive { name: &'static str },
}

impl AbsorberConfig {
    /// Checks the invariants the march relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.march.steps == 0 {
            return Err(ConfigError::NoSteps);
        }
        if StrictlyPositive::new(self.march.step_length).is_err() {
            return Err(ConfigError::StepLength {
                step_length: self.march.step_length,
            });
        }
        if UnitIntervalOpen::new(self.march.seed_concentration).is_err() {
            return Err(ConfigError::SeedConcentration {
                seed: self.march.seed_concentration,
            });
        }

        let fraction = self.feed.absorbable_fraction.get::<ratio>();
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::AbsorbableFraction {
                fraction: self.feed.absorbable_fraction,
            });
        }

        positive(self.feed.density, "gas density")?;
        positive(self.geometry.inner_diameter, "tube inner diameter")?;
        positive(self.geometry.wall_conductivity, "wall conductivity")?;
        positive(self.hydraulics.design_velocity, "design gas velocity")?;
        positive(self.liquid.viscosity, "liquid viscosity")?;
        positive(self.liquid.specific_heat, "liquid specific heat")?;
        positive(self.transfer.coolant_side, "cooling-water coefficient")?;
        positive(self.transfer.system_pressure, "system pressure")?;
        Ok(())
    }
}

fn positive<T: PartialOrd + Zero>(value: T, name: &'static str) -> Result<(), ConfigError> {
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|_| ConfigError::NotPositive { name })
}

/// Composition and density of the feed gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedGas {
    /// Mass fraction of the absorbable species in the feed.
    pub absorbable_fraction: Ratio,

    /// Gas density used to convert mass flow to volumetric flow.
    pub density: MassDensity,
}

impl Default for FeedGas {
    /// 80 mol% HCl in Cl2.
    fn default() -> Self {
        Self {
            absorbable_fraction: Ratio::new::<ratio>(0.6728),
            density: MassDensity::new::<kilogram_per_cubic_meter>(2.42),
        }
    }
}

impl FeedGas {
    /// Builds a binary feed from the absorbable species' mole fraction.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_absorption::models::absorption::falling_film::FeedGas;
    /// use uom::si::{
    ///     f64::{MassDensity, MolarMass, Ratio},
    ///     mass_density::kilogram_per_cubic_meter,
    ///     molar_mass::gram_per_mole,
    ///     ratio::ratio,
    /// };
    ///
    /// let feed = FeedGas::from_mole_fraction(
    ///     Ratio::new::<ratio>(0.8),
    ///     MolarMass::new::<gram_per_mole>(36.46),
    ///     MolarMass::new::<gram_per_mole>(70.906),
    ///     MassDensity::new::<kilogram_per_cubic_meter>(2.42),
    /// );
    /// assert!((feed.absorbable_fraction.get::<ratio>() - 0.6728).abs() < 1e-4);
    /// ```
    #[must_use]
    pub fn from_mole_fraction(
        mole_fraction: Ratio,
        absorbable: MolarMass,
        carrier: MolarMass,
        density: MassDensity,
    ) -> Self {
        let y = mole_fraction.get::<ratio>();
        let absorbable = absorbable.get::<gram_per_mole>();
        let carrier = carrier.get::<gram_per_mole>();
        let fraction = y * absorbable / (y * absorbable + (1.0 - y) * carrier);
        Self {
            absorbable_fraction: Ratio::new::<ratio>(fraction),
            density,
        }
    }
}

/// Tube bundle geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    pub inner_diameter: Length,
    pub wall_thickness: Length,
    pub wall_conductivity: ThermalConductivity,
}

impl Default for TubeGeometry {
    /// Impervious graphite tubes, 20 mm bore.
    fn default() -> Self {
        Self {
            inner_diameter: Length::new::<meter>(0.020),
            wall_thickness: Length::new::<meter>(0.005),
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(150.0),
        }
    }
}

impl TubeGeometry {
    /// Cross-sectional flow area of one tube.
    #[must_use]
    pub fn flow_area(&self) -> Area {
        let radius = self.inner_diameter / 2.0;
        radius * radius * PI
    }

    /// Wetted perimeter of one tube.
    #[must_use]
    pub fn wetted_perimeter(&self) -> Length {
        self.inner_diameter * PI
    }
}

/// Gas-side hydraulic design basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hydraulics {
    /// Target superficial gas velocity in the tubes.
    pub design_velocity: Velocity,
}

impl Default for Hydraulics {
    fn default() -> Self {
        Self {
            design_velocity: Velocity::new::<meter_per_second>(16.0),
        }
    }
}

/// Liquid film properties, held constant along the tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidProperties {
    pub viscosity: DynamicViscosity,
    pub specific_heat: SpecificHeatCapacity,
    pub heat_of_absorption: AvailableEnergy,
}

impl Default for LiquidProperties {
    fn default() -> Self {
        Self {
            viscosity: DynamicViscosity::new::<pascal_second>(0.0008),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
            heat_of_absorption: AvailableEnergy::new::<joule_per_kilogram>(1.8e6),
        }
    }
}

/// Mass- and heat-transfer coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferCoefficients {
    /// Gas-film mass-transfer coefficient in the correlation's native units
    /// (mol per s·m²·Pa).
    pub mass_transfer: f64,

    /// Molar mass of the absorbed species.
    pub molar_mass: MolarMass,

    /// Shell-side (cooling water) film coefficient.
    pub coolant_side: HeatTransfer,

    /// Total pressure of the gas.
    pub system_pressure: Pressure,
}

impl Default for TransferCoefficients {
    fn default() -> Self {
        Self {
            mass_transfer: 2.5e-4,
            molar_mass: MolarMass::new::<kilogram_per_mole>(0.0365),
            coolant_side: HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0),
            system_pressure: Pressure::new::<pascal>(101_325.0),
        }
    }
}

/// Axial discretization of the march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchConfig {
    /// Maximum number of axial steps.
    pub steps: usize,

    /// Fixed axial step length.
    pub step_length: Length,

    /// Liquid concentration at the top of the tube.
    ///
    /// A small recycle concentration rather than pure solvent, which keeps
    /// the liquid rate terms away from zero.
    pub seed_concentration: Ratio,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            steps: 60,
            step_length: Length::new::<meter>(0.1),
            seed_concentration: Ratio::new::<ratio>(0.05),
        }
    }
}
