use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EmissionsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    Gas,
    Diesel,
    Hybrid,
    #[serde(alias = "electric")]
    Ev,
}

/// kg of CO₂ per km for a gasoline engine.
pub const GAS_KG_PER_KM: f64 = 0.252;
/// kg of CO₂ per km for a diesel engine.
pub const DIESEL_KG_PER_KM: f64 = 0.270;
/// kg of CO₂ per km for a hybrid engine.
pub const HYBRID_KG_PER_KM: f64 = 0.140;

impl EngineType {
    pub const ALL: [EngineType; 4] = [
        EngineType::Gas,
        EngineType::Diesel,
        EngineType::Hybrid,
        EngineType::Ev,
    ];

    /// Base emission factor in kg CO₂ per km. `None` for engines without
    /// tailpipe emissions.
    pub fn base_factor(&self) -> Option<f64> {
        match self {
            EngineType::Gas => Some(GAS_KG_PER_KM),
            EngineType::Diesel => Some(DIESEL_KG_PER_KM),
            EngineType::Hybrid => Some(HYBRID_KG_PER_KM),
            EngineType::Ev => None,
        }
    }

    pub fn is_hybrid(&self) -> bool {
        matches!(self, EngineType::Hybrid)
    }
}

impl Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EngineType::Gas => "gas",
                EngineType::Diesel => "diesel",
                EngineType::Hybrid => "hybrid",
                EngineType::Ev => "ev",
            }
        )
    }
}

impl FromStr for EngineType {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gas" | "gasoline" | "petrol" => Ok(EngineType::Gas),
            "diesel" => Ok(EngineType::Diesel),
            "hybrid" => Ok(EngineType::Hybrid),
            "ev" | "electric" => Ok(EngineType::Ev),
            _ => Err(EmissionsError::InvalidArgument(format!(
                "unknown engine type '{s}', expected one of: gas, diesel, hybrid, ev"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_factor() {
        assert_eq!(EngineType::Gas.base_factor(), Some(0.252));
        assert_eq!(EngineType::Diesel.base_factor(), Some(0.27));
        assert_eq!(EngineType::Hybrid.base_factor(), Some(0.14));
        assert_eq!(EngineType::Ev.base_factor(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("GAS".parse::<EngineType>(), Ok(EngineType::Gas));
        assert_eq!("electric".parse::<EngineType>(), Ok(EngineType::Ev));
        assert_eq!(" hybrid ".parse::<EngineType>(), Ok(EngineType::Hybrid));
        assert!(matches!(
            "steam".parse::<EngineType>(),
            Err(EmissionsError::InvalidArgument(_))
        ));

        for engine in EngineType::ALL {
            assert_eq!(engine.to_string().parse::<EngineType>(), Ok(engine));
        }
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&EngineType::Ev).unwrap(), "\"ev\"");
        assert_eq!(
            serde_json::from_str::<EngineType>("\"electric\"").unwrap(),
            EngineType::Ev
        );
        assert_eq!(
            serde_json::from_str::<EngineType>("\"diesel\"").unwrap(),
            EngineType::Diesel
        );
        assert!(serde_json::from_str::<EngineType>("\"Diesel\"").is_err());
    }
}
