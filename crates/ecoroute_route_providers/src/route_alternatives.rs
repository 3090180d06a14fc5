use ecoroute_emissions::{
    error::EmissionsError, json::types::JsonRoute, problem::route_segment::RouteSegment,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One path returned by a route provider.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct RouteAlternative {
    /// Distance in meters
    pub distance: f64,

    /// Travel time in seconds
    pub duration: f64,

    /// `[longitude, latitude]` pairs along the path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<[f64; 2]>>,
}

/// Route alternatives in the order the provider ranked them.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Default)]
pub struct RouteAlternatives {
    pub routes: Vec<RouteAlternative>,
}

impl RouteAlternatives {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Core inputs in provider order. Alternatives with a negative or
    /// non-finite distance are rejected the same way request routes are.
    pub fn to_segments(&self) -> Result<Vec<RouteSegment>, EmissionsError> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                JsonRoute {
                    distance: route.distance,
                    duration: route.duration,
                }
                .to_segment(index)
            })
            .collect()
    }
}

impl std::hash::Hash for RouteAlternatives {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.routes.len().hash(state);
        for route in &self.routes {
            state.write_u64(route.distance.to_bits());
            state.write_u64(route.duration.to_bits());
            if let Some(geometry) = &route.geometry {
                for [x, y] in geometry {
                    state.write_u64(x.to_bits());
                    state.write_u64(y.to_bits());
                }
            } else {
                state.write_u8(0);
            }
        }
    }
}

/// GeoJSON `LineString` geometry as returned by the providers. Extra
/// dimensions such as elevation are dropped.
#[derive(Deserialize, Debug)]
pub(crate) struct GeoJsonLineString {
    coordinates: Vec<Vec<f64>>,
}

impl GeoJsonLineString {
    pub(crate) fn into_coordinates(self) -> Vec<[f64; 2]> {
        self.coordinates
            .into_iter()
            .filter_map(|position| match position.as_slice() {
                &[x, y, ..] => Some([x, y]),
                _ => None,
            })
            .collect()
    }
}
