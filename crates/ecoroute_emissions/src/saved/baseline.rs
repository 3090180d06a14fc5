use serde::Serialize;

use crate::{
    emission::co2::co2_for,
    problem::{
        engine_type::EngineType, kilograms::Kilograms, route_segment::RouteSegment,
        vehicle_category::VehicleCategory,
    },
};

/// Reference against which "saved" CO₂ is measured.
///
/// The hybrid and gas/diesel policies measure different things: a hybrid
/// compares itself to a gas engine on the same route, a gas or diesel vehicle
/// compares each alternative to the worst alternative of the same request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Baseline {
    /// The whole gas-engine emission of each route counts as saved.
    GasEquivalent,
    /// Gas-engine emission minus hybrid emission, route by route.
    GasOnSameRoute,
    /// Emission of the worst alternative minus the emission of each route.
    WorstAlternative { worst: Kilograms },
}

pub fn baseline_for(
    routes: &[RouteSegment],
    category: VehicleCategory,
    engine: EngineType,
) -> Baseline {
    match engine {
        EngineType::Ev => Baseline::GasEquivalent,
        EngineType::Hybrid => Baseline::GasOnSameRoute,
        EngineType::Gas | EngineType::Diesel => Baseline::WorstAlternative {
            worst: worst_emission(
                routes
                    .iter()
                    .map(|route| co2_for(engine, route, category)),
            ),
        },
    }
}

/// Highest emission of the iterator, zero when it is empty.
pub(crate) fn worst_emission(emissions: impl Iterator<Item = Kilograms>) -> Kilograms {
    emissions.fold(Kilograms::ZERO, Kilograms::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_kg_eq, segment};

    #[test]
    fn test_baseline_for_engine() {
        let routes = [segment(10_000.0, 1200.0), segment(10_000.0, 2400.0)];

        assert_eq!(
            baseline_for(&routes, VehicleCategory::Sedan, EngineType::Ev),
            Baseline::GasEquivalent
        );
        assert_eq!(
            baseline_for(&routes, VehicleCategory::Sedan, EngineType::Hybrid),
            Baseline::GasOnSameRoute
        );

        let Baseline::WorstAlternative { worst } =
            baseline_for(&routes, VehicleCategory::Sedan, EngineType::Gas)
        else {
            panic!("expected worst alternative baseline");
        };
        assert_kg_eq(worst, 2.898);
    }

    #[test]
    fn test_worst_of_empty_is_zero() {
        assert_eq!(
            baseline_for(&[], VehicleCategory::Suv, EngineType::Diesel),
            Baseline::WorstAlternative {
                worst: Kilograms::ZERO
            }
        );
    }
}
