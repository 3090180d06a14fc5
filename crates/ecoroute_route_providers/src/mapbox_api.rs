use std::{fmt::Display, time::Duration};

use reqwest::StatusCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::route_alternatives::{GeoJsonLineString, RouteAlternative, RouteAlternatives};

#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Hash, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MapboxProfile {
    Driving,
    DrivingTraffic,
}

impl Display for MapboxProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MapboxProfile::Driving => "driving",
                MapboxProfile::DrivingTraffic => "driving-traffic",
            }
        )
    }
}

#[derive(Debug, Error)]
pub enum MapboxError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No route found: {0}")]
    NoRoute(String),

    #[error("Directions request failed with code {code}: {message}")]
    Directions { code: String, message: String },

    #[error("Rate limited after {0} attempts")]
    RateLimited(u32),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct DirectionsResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    /// Meters
    distance: f64,
    /// Seconds
    duration: f64,
    geometry: Option<GeoJsonLineString>,
}

pub struct MapboxDirectionsClientParams {
    pub access_token: String,
    pub retry_interval: Duration,
    pub max_attempts: u32,
}

pub const MAPBOX_DIRECTIONS_API_URL: &str = "https://api.mapbox.com/directions/v5/mapbox";

pub struct MapboxDirectionsClient {
    params: MapboxDirectionsClientParams,
    client: reqwest::Client,
}

impl MapboxDirectionsClient {
    pub fn new(params: MapboxDirectionsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_routes(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        profile: MapboxProfile,
    ) -> Result<RouteAlternatives, MapboxError> {
        let url = format!(
            "{}/{}/{},{};{},{}",
            MAPBOX_DIRECTIONS_API_URL,
            profile,
            from.x(),
            from.y(),
            to.x(),
            to.y()
        );

        for attempt in 1..=self.params.max_attempts {
            debug!(
                "MapboxApi: Requesting directions {}/{}",
                attempt, self.params.max_attempts
            );

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("alternatives", "true"),
                    ("geometries", "geojson"),
                    ("overview", "full"),
                    ("steps", "false"),
                    ("access_token", self.params.access_token.as_str()),
                ])
                .send()
                .await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                tokio::time::sleep(self.params.retry_interval).await;
                continue;
            }

            let status = response.status().as_u16();
            let body = response.text().await?;

            return parse_directions_response(status, &body);
        }

        Err(MapboxError::RateLimited(self.params.max_attempts))
    }
}

/// Mapbox reports "no route" with a regular body and a non-`Ok` code, so the
/// body is inspected before the HTTP status.
pub(crate) fn parse_directions_response(
    status: u16,
    body: &str,
) -> Result<RouteAlternatives, MapboxError> {
    let response: DirectionsResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(MapboxError::Api {
                status,
                message: body.to_string(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let message = response.message.unwrap_or_default();
    match response.code.as_str() {
        "Ok" => Ok(RouteAlternatives {
            routes: response
                .routes
                .into_iter()
                .map(|route| RouteAlternative {
                    distance: route.distance,
                    duration: route.duration,
                    geometry: route.geometry.map(GeoJsonLineString::into_coordinates),
                })
                .collect(),
        }),
        "NoRoute" | "NoSegment" => Err(MapboxError::NoRoute(message)),
        code => Err(MapboxError::Directions {
            code: code.to_string(),
            message,
        }),
    }
}
