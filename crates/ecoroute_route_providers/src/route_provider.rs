use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    graphhopper_api::GraphHopperProfile, mapbox_api::MapboxProfile,
    route_alternatives::RouteAlternatives,
};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub enum RouteProvider {
    /// https://docs.mapbox.com/api/navigation/directions/
    Mapbox { profile: MapboxProfile },
    /// https://docs.graphhopper.com/openapi/routing
    GraphHopperApi { gh_profile: GraphHopperProfile },
    /// Any OSRM server, see `OSRM_URL`
    Osrm { profile: String },

    Custom { routes: RouteAlternatives },
}

impl RouteProvider {
    pub fn name(&self) -> &'static str {
        match self {
            RouteProvider::Mapbox { .. } => "mapbox",
            RouteProvider::GraphHopperApi { .. } => "graphhopper",
            RouteProvider::Osrm { .. } => "osrm",
            RouteProvider::Custom { .. } => "custom",
        }
    }

    /// Live-traffic and inline routes bypass the routes cache.
    pub fn is_cacheable(&self) -> bool {
        !matches!(
            self,
            RouteProvider::Mapbox {
                profile: MapboxProfile::DrivingTraffic
            } | RouteProvider::Custom { .. }
        )
    }
}

impl std::hash::Hash for RouteProvider {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            RouteProvider::Mapbox { profile } => {
                state.write_u8(0);
                profile.hash(state);
            }
            RouteProvider::GraphHopperApi { gh_profile } => {
                state.write_u8(1);
                gh_profile.hash(state);
            }
            RouteProvider::Osrm { profile } => {
                state.write_u8(2);
                profile.hash(state);
            }
            RouteProvider::Custom { routes } => {
                state.write_u8(3);
                routes.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let provider: RouteProvider =
            serde_json::from_str(r#"{ "mapbox": { "profile": "driving-traffic" } }"#).unwrap();
        assert!(matches!(
            provider,
            RouteProvider::Mapbox {
                profile: MapboxProfile::DrivingTraffic
            }
        ));

        let provider: RouteProvider =
            serde_json::from_str(r#"{ "graph_hopper_api": { "gh_profile": "small_truck" } }"#)
                .unwrap();
        assert_eq!(provider.name(), "graphhopper");

        let provider: RouteProvider =
            serde_json::from_str(r#"{ "osrm": { "profile": "driving" } }"#).unwrap();
        assert_eq!(provider.name(), "osrm");
    }

    #[test]
    fn test_is_cacheable() {
        assert!(
            RouteProvider::Mapbox {
                profile: MapboxProfile::Driving
            }
            .is_cacheable()
        );
        assert!(
            !RouteProvider::Mapbox {
                profile: MapboxProfile::DrivingTraffic
            }
            .is_cacheable()
        );
        assert!(
            RouteProvider::Osrm {
                profile: "driving".to_string()
            }
            .is_cacheable()
        );
        assert!(
            !RouteProvider::Custom {
                routes: RouteAlternatives::default()
            }
            .is_cacheable()
        );
    }
}
