use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    error::EmissionsError,
    problem::{
        engine_type::EngineType, route_segment::RouteSegment, vehicle_category::VehicleCategory,
    },
    saved::{
        baseline::Baseline,
        route_estimate::{RouteEstimate, RoutesEstimate, estimate_routes},
    },
};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "EmissionsRequest")]
pub struct JsonEmissionsRequest {
    /// Route alternatives in the order the route source ranked them
    pub routes: Vec<JsonRoute>,
    pub vehicle: JsonVehicle,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy)]
#[serde(deny_unknown_fields, rename = "Route")]
pub struct JsonRoute {
    /// Distance in meters
    pub distance: f64,

    /// Travel time in seconds
    pub duration: f64,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub category: VehicleCategory,
    pub engine: EngineType,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case", rename = "Baseline")]
pub enum JsonBaseline {
    GasEquivalent,
    GasOnSameRoute,
    WorstAlternative { worst_kg: f64 },
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "RouteEstimate")]
pub struct JsonRouteEstimate {
    pub index: usize,
    pub distance: f64,
    pub duration: f64,
    pub average_speed_kmh: f64,
    pub emitted_kg: f64,
    pub saved_kg: f64,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "EmissionsResponse")]
pub struct JsonEmissionsResponse {
    pub baseline: JsonBaseline,
    pub routes: Vec<JsonRouteEstimate>,
    pub greenest_route: Option<usize>,
}

impl JsonRoute {
    pub fn to_segment(&self, index: usize) -> Result<RouteSegment, EmissionsError> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(EmissionsError::InvalidArgument(format!(
                "routes[{index}].distance must be a non-negative number of meters, got {}",
                self.distance
            )));
        }

        Ok(RouteSegment::new(self.distance, self.duration))
    }
}

impl JsonEmissionsRequest {
    pub fn segments(&self) -> Result<Vec<RouteSegment>, EmissionsError> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| route.to_segment(index))
            .collect()
    }

    pub fn estimate(&self) -> Result<JsonEmissionsResponse, EmissionsError> {
        let segments = self.segments()?;
        let estimate = estimate_routes(&segments, self.vehicle.category, self.vehicle.engine);

        Ok(JsonEmissionsResponse::from(&estimate))
    }
}

impl From<Baseline> for JsonBaseline {
    fn from(value: Baseline) -> Self {
        match value {
            Baseline::GasEquivalent => JsonBaseline::GasEquivalent,
            Baseline::GasOnSameRoute => JsonBaseline::GasOnSameRoute,
            Baseline::WorstAlternative { worst } => JsonBaseline::WorstAlternative {
                worst_kg: worst.value(),
            },
        }
    }
}

impl From<&RouteEstimate> for JsonRouteEstimate {
    fn from(value: &RouteEstimate) -> Self {
        JsonRouteEstimate {
            index: value.index,
            distance: value.segment.distance().value(),
            duration: value.segment.duration_seconds(),
            average_speed_kmh: value.segment.average_speed().value(),
            emitted_kg: value.emitted.value(),
            saved_kg: value.saved.value(),
        }
    }
}

impl From<&RoutesEstimate> for JsonEmissionsResponse {
    fn from(value: &RoutesEstimate) -> Self {
        JsonEmissionsResponse {
            baseline: value.baseline.into(),
            routes: value.routes.iter().map(JsonRouteEstimate::from).collect(),
            greenest_route: value.greenest_route().map(|route| route.index),
        }
    }
}
