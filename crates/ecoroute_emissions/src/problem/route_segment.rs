use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::problem::{kmh::Kmh, meters::Meters};

/// One candidate path between two points, reduced to its total length and
/// expected travel time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RouteSegment {
    distance: Meters,
    duration_seconds: f64,
}

impl RouteSegment {
    /// Durations below this are clamped when computing a speed.
    pub const MIN_RATE_DURATION_SECONDS: f64 = 1.0;

    pub fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance: Meters::new(distance_meters),
            duration_seconds,
        }
    }

    pub fn from_duration(distance: Meters, duration: SignedDuration) -> Self {
        Self {
            distance,
            duration_seconds: duration.as_secs_f64(),
        }
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    /// The duration as it was given, possibly zero or negative.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// The duration used for rate calculations, never below one second.
    /// `f64::max` drops NaN, so a NaN duration also ends up at one second.
    pub fn rate_duration_seconds(&self) -> f64 {
        self.duration_seconds.max(Self::MIN_RATE_DURATION_SECONDS)
    }

    pub fn km(&self) -> f64 {
        self.distance.km()
    }

    pub fn average_speed(&self) -> Kmh {
        Kmh::from_km_and_seconds(self.km(), self.rate_duration_seconds())
    }
}
