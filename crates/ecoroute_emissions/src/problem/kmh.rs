use std::fmt::Display;

use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Kmh(f64);

impl Kmh {
    pub fn new(value: f64) -> Self {
        Kmh(value)
    }

    /// Average speed for `km` kilometers covered in `seconds` seconds.
    pub fn from_km_and_seconds(km: f64, seconds: f64) -> Self {
        Kmh(km / (seconds / SECONDS_PER_HOUR))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for Kmh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}
