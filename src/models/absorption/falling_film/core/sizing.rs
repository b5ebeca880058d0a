use uom::si::{
    f64::{Area, MassRate, Velocity, VolumeRate},
    ratio::ratio,
};

use super::AbsorberConfig;

/// Tube count and gas hydraulics for a given feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Number of parallel tubes.
    pub tube_count: usize,

    /// Total gas flow area of all tubes.
    pub flow_area: Area,

    /// Superficial gas velocity at `tube_count` tubes.
    ///
    /// Never above the design velocity, since the count is rounded up.
    pub gas_velocity: Velocity,
}

impl Sizing {
    /// Sizes the bundle so the gas velocity does not exceed the design value.
    ///
    /// The required flow area is `Q / v_design` with `Q` the volumetric gas
    /// flow. Dividing by one tube's area and rounding up gives the count.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(gas_flow: MassRate, config: &AbsorberConfig) -> Self {
        let tube_area = config.geometry.flow_area();
        let volume_rate: VolumeRate = gas_flow / config.feed.density;
        let required_area: Area = volume_rate / config.hydraulics.design_velocity;

        let tubes = (required_area / tube_area).get::<ratio>().ceil();
        let tube_count = tubes as usize;

        let flow_area = tube_area * tubes;
        Self {
            tube_count,
            flow_area,
            gas_velocity: volume_rate / flow_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_rate::kilogram_per_second, velocity::meter_per_second};

    fn kg_per_hour(flow: f64) -> MassRate {
        MassRate::new::<kilogram_per_second>(flow / 3600.0)
    }

    #[test]
    fn reference_flow_needs_58_tubes() {
        let sizing = Sizing::new(kg_per_hour(2500.0), &AbsorberConfig::default());

        assert_eq!(sizing.tube_count, 58);
        assert_relative_eq!(
            sizing.gas_velocity.get::<meter_per_second>(),
            15.748_684_245_659_508,
            max_relative = 1e-9
        );
    }

    #[test]
    fn rounds_up() {
        let config = AbsorberConfig::default();

        for (flow, tubes) in [
            (1.0, 1),
            (100.0, 3),
            (1000.0, 23),
            (5000.0, 115),
            (10_000.0, 229),
        ] {
            assert_eq!(Sizing::new(kg_per_hour(flow), &config).tube_count, tubes);
        }
    }

    #[test]
    fn never_exceeds_design_velocity() {
        let config = AbsorberConfig::default();
        let design = config.hydraulics.design_velocity.get::<meter_per_second>();

        for flow in [1.0, 37.0, 512.0, 2500.0, 7777.0] {
            let sizing = Sizing::new(kg_per_hour(flow), &config);
            assert!(sizing.tube_count >= 1);
            assert!(sizing.gas_velocity.get::<meter_per_second>() <= design + 1e-9);
        }
    }

    #[test]
    fn tube_count_is_monotonic_in_gas_flow() {
        let config = AbsorberConfig::default();

        let counts: Vec<usize> = (1..=200)
            .map(|i| Sizing::new(kg_per_hour(f64::from(i) * 50.0), &config).tube_count)
            .collect();

        assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
