use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::route_alternatives::{GeoJsonLineString, RouteAlternative, RouteAlternatives};

pub type GHPoint = [f64; 2];

/// Motorized GraphHopper profiles, the only ones that burn fuel.
#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Hash, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GraphHopperProfile {
    Car,
    SmallTruck,
    Truck,
}

impl Display for GraphHopperProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GraphHopperProfile::Car => "car",
                GraphHopperProfile::SmallTruck => "small_truck",
                GraphHopperProfile::Truck => "truck",
            }
        )
    }
}

#[derive(Debug, Error)]
pub enum GraphHopperError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRequestBody {
    /// `[longitude, latitude]` of the origin then the destination
    pub points: Vec<GHPoint>,

    /// Routing profile (e.g., "car", "truck")
    pub profile: String,

    /// "alternative_route" to get more than one path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    #[serde(
        rename = "alternative_route.max_paths",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_paths: Option<u32>,

    /// Return GeoJSON coordinates instead of an encoded polyline
    pub points_encoded: bool,

    pub instructions: bool,

    pub calc_points: bool,
}

#[derive(Deserialize)]
struct RouteSolution {
    paths: Vec<GraphHopperPath>,
}

#[derive(Deserialize)]
struct GraphHopperPath {
    /// Meters
    distance: f64,
    /// Milliseconds
    time: f64,
    points: Option<GeoJsonLineString>,
}

#[derive(Deserialize)]
struct GraphHopperErrorBody {
    message: String,
}

pub struct GraphHopperRouteClientParams {
    pub api_key: String,
    pub max_paths: u32,
}

pub const GRAPHOPPER_ROUTE_API_URL: &str = "https://graphhopper.com/api/1/route";

pub struct GraphHopperRouteClient {
    params: GraphHopperRouteClientParams,
    client: reqwest::Client,
}

impl GraphHopperRouteClient {
    pub fn new(params: GraphHopperRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_routes(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        profile: GraphHopperProfile,
    ) -> Result<RouteAlternatives, GraphHopperError> {
        let body = RouteRequestBody {
            points: vec![[from.x(), from.y()], [to.x(), to.y()]],
            profile: profile.to_string(),
            algorithm: Some("alternative_route".to_string()),
            max_paths: Some(self.params.max_paths),
            points_encoded: false,
            instructions: false,
            calc_points: true,
        };

        debug!("GraphHopperApi: Posting route request ({})", profile);

        let response = self
            .client
            .post(GRAPHOPPER_ROUTE_API_URL)
            .query(&[("key", &self.params.api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        parse_route_response(status, &text)
    }
}

pub(crate) fn parse_route_response(
    status: u16,
    body: &str,
) -> Result<RouteAlternatives, GraphHopperError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<GraphHopperErrorBody>(body)
            .map(|error| error.message)
            .unwrap_or_else(|_| body.to_string());
        return Err(GraphHopperError::Api { status, message });
    }

    let solution: RouteSolution = serde_json::from_str(body)?;

    Ok(RouteAlternatives {
        routes: solution
            .paths
            .into_iter()
            .map(|path| RouteAlternative {
                distance: path.distance,
                duration: path.time / 1000.0,
                geometry: path.points.map(GeoJsonLineString::into_coordinates),
            })
            .collect(),
    })
}
