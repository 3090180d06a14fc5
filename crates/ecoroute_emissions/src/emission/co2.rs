use crate::{
    emission::speed_band::SpeedBand,
    problem::{
        engine_type::EngineType, kilograms::Kilograms, kmh::Kmh, route_segment::RouteSegment,
        vehicle_category::VehicleCategory,
    },
};

/// CO₂ emitted by `engine` over `segment` for a vehicle of the given
/// `category`. Never rounded.
pub fn co2_for(engine: EngineType, segment: &RouteSegment, category: VehicleCategory) -> Kilograms {
    let Some(base_factor) = engine.base_factor() else {
        return Kilograms::ZERO;
    };

    let km = segment.km();
    let speed_band = SpeedBand::from_speed(segment.average_speed());

    Kilograms::new(km * base_factor * category.weight_factor() * speed_band.multiplier(engine))
}

/// Effective kg of CO₂ per km once the category and speed adjustments are
/// applied.
pub fn emission_factor(engine: EngineType, category: VehicleCategory, speed: Kmh) -> f64 {
    match engine.base_factor() {
        Some(base_factor) => {
            base_factor
                * category.weight_factor()
                * SpeedBand::from_speed(speed).multiplier(engine)
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_kg_eq, segment};

    #[test]
    fn test_gas_neutral_band() {
        let co2 = co2_for(
            EngineType::Gas,
            &segment(10_000.0, 1200.0),
            VehicleCategory::Sedan,
        );
        assert_kg_eq(co2, 2.52);
    }

    #[test]
    fn test_ev_is_zero() {
        for category in VehicleCategory::ALL {
            for route in [
                segment(10_000.0, 1200.0),
                segment(0.0, 0.0),
                segment(250_000.0, 60.0),
            ] {
                assert_eq!(co2_for(EngineType::Ev, &route, category).value(), 0.0);
            }
        }
    }

    #[test]
    fn test_pickup_truck_low_band() {
        let co2 = co2_for(
            EngineType::Gas,
            &segment(10_000.0, 2400.0),
            VehicleCategory::PickupTruck,
        );
        assert_kg_eq(co2, 3.6225);
    }

    #[test]
    fn test_diesel_high_band() {
        // 120 km/h
        let co2 = co2_for(
            EngineType::Diesel,
            &segment(100_000.0, 3000.0),
            VehicleCategory::Suv,
        );
        assert_kg_eq(co2, 100.0 * 0.27 * 1.1 * 1.1);
    }

    #[test]
    fn test_hybrid_bands() {
        let city = co2_for(
            EngineType::Hybrid,
            &segment(10_000.0, 2400.0),
            VehicleCategory::Sedan,
        );
        assert_kg_eq(city, 10.0 * 0.14 * 0.95);

        let highway = co2_for(
            EngineType::Hybrid,
            &segment(100_000.0, 3000.0),
            VehicleCategory::Sedan,
        );
        assert_kg_eq(highway, 100.0 * 0.14 * 1.05);
    }

    #[test]
    fn test_degenerate_segments() {
        assert_eq!(
            co2_for(EngineType::Gas, &segment(0.0, 0.0), VehicleCategory::Sedan),
            Kilograms::ZERO
        );

        // 500 m in a clamped second is far above the highway band
        let co2 = co2_for(EngineType::Gas, &segment(500.0, -10.0), VehicleCategory::Sedan);
        assert_kg_eq(co2, 0.5 * 0.252 * 1.1);
        assert!(co2.value().is_finite());
    }

    #[test]
    fn test_non_negative() {
        for engine in EngineType::ALL {
            for category in VehicleCategory::ALL {
                for distance in [0.0, 1.0, 850.0, 12_345.0, 400_000.0] {
                    for duration in [-5.0, 0.0, 1.0, 60.0, 1800.0, 36_000.0] {
                        let co2 = co2_for(engine, &segment(distance, duration), category);
                        assert!(co2.value() >= 0.0, "{engine} {category} {distance} {duration}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_distance_within_band() {
        // 3600 s keeps every distance below in the neutral band (30 to 80 km/h)
        for engine in [EngineType::Gas, EngineType::Diesel, EngineType::Hybrid] {
            let mut previous = Kilograms::ZERO;
            for distance in [30_000.0, 40_000.0, 55_000.0, 70_000.0, 80_000.0] {
                let co2 = co2_for(engine, &segment(distance, 3600.0), VehicleCategory::Suv);
                assert!(co2 > previous);
                previous = co2;
            }
        }
    }

    #[test]
    fn test_category_ordering() {
        for engine in [EngineType::Gas, EngineType::Diesel, EngineType::Hybrid] {
            for route in [segment(10_000.0, 2400.0), segment(10_000.0, 1200.0), segment(100_000.0, 3000.0)] {
                let pickup = co2_for(engine, &route, VehicleCategory::PickupTruck);
                let suv = co2_for(engine, &route, VehicleCategory::Suv);
                let sedan = co2_for(engine, &route, VehicleCategory::Sedan);
                assert!(pickup > suv);
                assert!(suv > sedan);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let route = segment(12_345.6, 987.6);
        for engine in EngineType::ALL {
            let first = co2_for(engine, &route, VehicleCategory::PickupTruck);
            let second = co2_for(engine, &route, VehicleCategory::PickupTruck);
            assert_eq!(first.value().to_bits(), second.value().to_bits());
        }
    }

    #[test]
    fn test_emission_factor() {
        assert_eq!(
            emission_factor(EngineType::Ev, VehicleCategory::PickupTruck, Kmh::new(10.0)),
            0.0
        );
        assert!(
            (emission_factor(EngineType::Gas, VehicleCategory::PickupTruck, Kmh::new(15.0))
                - 0.252 * 1.25 * 1.15)
                .abs()
                < 1e-12
        );
        assert_eq!(
            emission_factor(EngineType::Diesel, VehicleCategory::Sedan, Kmh::new(50.0)),
            0.27
        );
    }
}
