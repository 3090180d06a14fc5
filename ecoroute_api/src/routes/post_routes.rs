use std::sync::Arc;

use axum::{Json, extract::State};
use ecoroute_emissions::json::types::{JsonEmissionsResponse, JsonVehicle};
use ecoroute_emissions::saved::route_estimate::estimate_routes;
use ecoroute_route_providers::{
    route_alternatives::RouteAlternatives, route_provider::RouteProvider,
};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value::LineString};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RoutesRequestBody {
    /// `[longitude, latitude]` of the origin
    pub from: [f64; 2],
    /// `[longitude, latitude]` of the destination
    pub to: [f64; 2],
    pub provider: RouteProvider,
    pub vehicle: JsonVehicle,
}

fn feature_collection_schema(_gen: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "required": ["type", "features"],
        "properties": {
            "type": { "type": "string", "enum": ["FeatureCollection"] },
            "features": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["type", "properties"],
                    "properties": {
                        "type": { "type": "string", "enum": ["Feature"] },
                        "geometry": {
                            "oneOf": [
                                { "type": "null" },
                                {
                                    "type": "object",
                                    "required": ["type", "coordinates"],
                                    "properties": {
                                        "type": { "type": "string", "enum": ["LineString"] },
                                        "coordinates": {
                                            "type": "array",
                                            "items": {
                                                "type": "array",
                                                "minItems": 2,
                                                "items": { "type": "number" }
                                            }
                                        }
                                    }
                                }
                            ]
                        },
                        "properties": { "type": "object" }
                    }
                }
            }
        }
    })
}

#[derive(Serialize, JsonSchema)]
pub struct RoutesResponse {
    #[schemars(schema_with = "feature_collection_schema")]
    pub routes: FeatureCollection,
    pub estimate: JsonEmissionsResponse,
}

fn validate_point(name: &str, [lon, lat]: [f64; 2]) -> Result<geo_types::Point, ApiError> {
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(ApiError::BadRequest(format!(
            "{name} must be [longitude, latitude], got [{lon}, {lat}]"
        )));
    }

    Ok(geo_types::Point::new(lon, lat))
}

fn route_features(
    alternatives: &RouteAlternatives,
    estimate: &JsonEmissionsResponse,
) -> FeatureCollection {
    let features = alternatives
        .routes
        .iter()
        .zip(&estimate.routes)
        .map(|(route, route_estimate)| {
            let mut properties = JsonObject::new();
            properties.insert("index".to_string(), json!(route_estimate.index));
            properties.insert("distance".to_string(), json!(route.distance));
            properties.insert("duration".to_string(), json!(route.duration));
            properties.insert("emitted_kg".to_string(), json!(route_estimate.emitted_kg));
            properties.insert("saved_kg".to_string(), json!(route_estimate.saved_kg));
            properties.insert(
                "greenest".to_string(),
                json!(estimate.greenest_route == Some(route_estimate.index)),
            );

            Feature {
                bbox: None,
                geometry: route.geometry.as_ref().map(|coordinates| {
                    Geometry::new(LineString(
                        coordinates.iter().map(|&[x, y]| vec![x, y]).collect(),
                    ))
                }),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub async fn post_routes_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RoutesRequestBody>,
) -> Result<Json<RoutesResponse>, ApiError> {
    let from = validate_point("from", body.from)?;
    let to = validate_point("to", body.to)?;

    let alternatives = state
        .route_client
        .fetch_routes(from, to, &body.provider)
        .await?;

    info!(
        "{} returned {} route alternative(s)",
        body.provider.name(),
        alternatives.len()
    );

    let estimate = estimate_routes(
        &alternatives.to_segments()?,
        body.vehicle.category,
        body.vehicle.engine,
    );
    let estimate = JsonEmissionsResponse::from(&estimate);

    Ok(Json(RoutesResponse {
        routes: route_features(&alternatives, &estimate),
        estimate,
    }))
}
