use simplelog::{Config, LevelFilter, TestLogger};
use uom::si::{
    f64::{MassRate, Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use super::ProcessInputs;

/// Routes `log` output through the test harness.
pub(crate) fn init_logging() {
    // Fails when another test already installed the logger.
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

pub(crate) fn kg_per_hour(flow: f64) -> MassRate {
    MassRate::new::<kilogram_per_second>(flow / 3600.0)
}

pub(crate) fn celsius(t: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(t)
}

/// 2500 kg/h of feed at 10 °C, 32 wt% product, 32 °C cooling water.
pub(crate) fn reference_inputs() -> ProcessInputs {
    ProcessInputs::new(
        kg_per_hour(2500.0),
        celsius(10.0),
        Ratio::new::<ratio>(0.32),
        celsius(32.0),
    )
    .expect("reference inputs are valid")
}
