use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A mass of CO₂ in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Kilograms(f64);

impl Kilograms {
    pub const ZERO: Kilograms = Kilograms(0.0);

    pub fn new(value: f64) -> Self {
        Kilograms(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn max(self, other: Kilograms) -> Kilograms {
        Kilograms(self.0.max(other.0))
    }

    /// Rounds half away from zero at the given number of decimal places.
    ///
    /// A negative zero coming out of the rounding is returned as `+0.0` so
    /// that "nothing saved" always compares and prints the same way.
    pub fn round_to_decimals(self, decimals: u32) -> Kilograms {
        let scale = 10f64.powi(decimals as i32);
        let rounded = (self.0 * scale).round() / scale;

        if rounded == 0.0 {
            Kilograms::ZERO
        } else {
            Kilograms(rounded)
        }
    }
}

impl PartialOrd for Kilograms {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for Kilograms {
    fn from(value: f64) -> Self {
        Kilograms::new(value)
    }
}

impl Display for Kilograms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg", self.0)
    }
}

impl Add for Kilograms {
    type Output = Kilograms;

    fn add(self, other: Kilograms) -> Kilograms {
        Kilograms(self.0 + other.0)
    }
}

impl AddAssign for Kilograms {
    fn add_assign(&mut self, other: Kilograms) {
        self.0 += other.0;
    }
}

impl Sub for Kilograms {
    type Output = Kilograms;

    fn sub(self, other: Kilograms) -> Kilograms {
        Kilograms(self.0 - other.0)
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Kilograms>>(iter: I) -> Kilograms {
        iter.fold(Kilograms::ZERO, |acc, x| acc + x)
    }
}
