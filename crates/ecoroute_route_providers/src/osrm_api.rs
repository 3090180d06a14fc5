use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::route_alternatives::{GeoJsonLineString, RouteAlternative, RouteAlternatives};

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No route found: {0}")]
    NoRoute(String),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: f64,
    /// Seconds
    duration: f64,
    geometry: Option<GeoJsonLineString>,
}

pub struct OsrmRouteClientParams {
    pub osrm_url: String,
}

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";
pub const OSRM_DEFAULT_URL: &str = "https://router.project-osrm.org";

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn route_url(&self, from: geo_types::Point, to: geo_types::Point, profile: &str) -> String {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(profile);
        url.push('/');
        url.push_str(&format!("{},{};{},{}", from.x(), from.y(), to.x(), to.y()));
        url
    }

    pub async fn fetch_routes(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        profile: &str,
    ) -> Result<RouteAlternatives, OsrmError> {
        let url = self.route_url(from, to, profile);
        debug!("OsrmApi: Requesting {}", url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("alternatives", "true"),
                ("geometries", "geojson"),
                ("overview", "full"),
                ("steps", "false"),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_route_response(status, &body)
    }
}

/// OSRM answers "no route" with HTTP 400 and a JSON body, so the body is
/// inspected before the status.
pub(crate) fn parse_route_response(
    status: u16,
    body: &str,
) -> Result<RouteAlternatives, OsrmError> {
    let response: OsrmRouteResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(OsrmError::Api {
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
        "NoRoute" | "NoSegment" => Err(OsrmError::NoRoute(message)),
        _ => Err(OsrmError::Api { status, message }),
    }
}
