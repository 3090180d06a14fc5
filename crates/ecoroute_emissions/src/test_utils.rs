use crate::problem::{kilograms::Kilograms, route_segment::RouteSegment};

pub const EPSILON: f64 = 1e-9;

pub fn segment(distance_meters: f64, duration_seconds: f64) -> RouteSegment {
    RouteSegment::new(distance_meters, duration_seconds)
}

pub fn assert_kg_eq(actual: Kilograms, expected: f64) {
    assert!(
        (actual.value() - expected).abs() < EPSILON,
        "expected {expected} kg, got {} kg",
        actual.value()
    );
}

pub fn values(kilograms: &[Kilograms]) -> Vec<f64> {
    kilograms.iter().map(Kilograms::value).collect()
}
