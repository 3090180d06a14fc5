use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EmissionsError;

/// Body class of the vehicle, scales the emissions of combustion engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum VehicleCategory {
    #[serde(rename = "Pickup Truck", alias = "pickup_truck")]
    PickupTruck,
    #[serde(rename = "SUV", alias = "suv")]
    Suv,
    #[serde(rename = "Sedan", alias = "sedan")]
    Sedan,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::PickupTruck,
        VehicleCategory::Suv,
        VehicleCategory::Sedan,
    ];

    pub fn weight_factor(&self) -> f64 {
        match self {
            VehicleCategory::PickupTruck => 1.25,
            VehicleCategory::Suv => 1.10,
            VehicleCategory::Sedan => 1.0,
        }
    }
}

impl Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleCategory::PickupTruck => "Pickup Truck",
                VehicleCategory::Suv => "SUV",
                VehicleCategory::Sedan => "Sedan",
            }
        )
    }
}

impl FromStr for VehicleCategory {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "pickuptruck" | "pickup" => Ok(VehicleCategory::PickupTruck),
            "suv" => Ok(VehicleCategory::Suv),
            "sedan" => Ok(VehicleCategory::Sedan),
            _ => Err(EmissionsError::InvalidArgument(format!(
                "unknown vehicle category '{s}', expected one of: Pickup Truck, SUV, Sedan"
            ))),
        }
    }
}
