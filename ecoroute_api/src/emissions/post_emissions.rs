use axum::Json;
use ecoroute_emissions::json::types::{JsonEmissionsRequest, JsonEmissionsResponse};

use crate::error::ApiError;

pub async fn post_emissions_handler(
    Json(body): Json<JsonEmissionsRequest>,
) -> Result<Json<JsonEmissionsResponse>, ApiError> {
    let response = body.estimate()?;

    Ok(Json(response))
}
