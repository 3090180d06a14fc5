use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{engine_type::EngineType, kmh::Kmh};

/// Below this average speed a trip is treated as city or congested driving.
pub const LOW_SPEED_BAND_KMH: f64 = 25.0;
/// Above this average speed a trip is treated as highway driving.
pub const HIGH_SPEED_BAND_KMH: f64 = 90.0;

/// Driving regime derived from the average speed of a trip.
///
/// Boundaries are half-open: the neutral band is `[25, 90]` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpeedBand {
    Low,
    Neutral,
    High,
}

impl SpeedBand {
    pub fn from_speed(speed: Kmh) -> Self {
        let kmh = speed.value();
        if kmh < LOW_SPEED_BAND_KMH {
            SpeedBand::Low
        } else if kmh > HIGH_SPEED_BAND_KMH {
            SpeedBand::High
        } else {
            SpeedBand::Neutral
        }
    }

    /// Adjustment applied on top of the base emission factor. For hybrids the
    /// low band lowers emissions instead of raising them.
    pub fn multiplier(&self, engine: EngineType) -> f64 {
        match (engine.is_hybrid(), self) {
            (_, SpeedBand::Neutral) => 1.0,
            (true, SpeedBand::Low) => 0.95,
            (true, SpeedBand::High) => 1.05,
            (false, SpeedBand::Low) => 1.15,
            (false, SpeedBand::High) => 1.10,
        }
    }
}
