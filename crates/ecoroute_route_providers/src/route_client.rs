use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    cache::{FileCache, RoutesCache},
    graphhopper_api::{GraphHopperError, GraphHopperRouteClient, GraphHopperRouteClientParams},
    mapbox_api::{MapboxDirectionsClient, MapboxDirectionsClientParams, MapboxError},
    osrm_api::{OSRM_DEFAULT_URL, OsrmError, OsrmRouteClient, OsrmRouteClientParams},
    route_alternatives::RouteAlternatives,
    route_provider::RouteProvider,
};

pub const MAPBOX_ACCESS_TOKEN_ENV_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const GRAPHHOPPER_API_KEY_ENV_VAR: &str = "GRAPHHOPPER_API_KEY";
pub const OSRM_URL_ENV_VAR: &str = "OSRM_URL";

#[derive(Debug, Clone)]
pub struct RouteClientParams {
    pub mapbox_access_token: Option<String>,
    pub graphhopper_api_key: Option<String>,
    pub osrm_url: String,
}

impl RouteClientParams {
    pub fn from_env() -> Self {
        Self {
            mapbox_access_token: std::env::var(MAPBOX_ACCESS_TOKEN_ENV_VAR).ok(),
            graphhopper_api_key: std::env::var(GRAPHHOPPER_API_KEY_ENV_VAR).ok(),
            osrm_url: std::env::var(OSRM_URL_ENV_VAR)
                .unwrap_or_else(|_| OSRM_DEFAULT_URL.to_string()),
        }
    }
}

pub struct RouteClient<C = FileCache>
where
    C: RoutesCache,
{
    mapbox_client: Option<MapboxDirectionsClient>,
    graphhopper_client: Option<GraphHopperRouteClient>,
    osrm_client: OsrmRouteClient,
    cache: C,
}

impl Default for RouteClient<FileCache> {
    fn default() -> Self {
        RouteClient::new(RouteClientParams::from_env(), FileCache::from_env())
    }
}

impl<C> RouteClient<C>
where
    C: RoutesCache,
{
    pub fn new(params: RouteClientParams, cache: C) -> Self {
        Self {
            mapbox_client: params.mapbox_access_token.map(|access_token| {
                MapboxDirectionsClient::new(MapboxDirectionsClientParams {
                    access_token,
                    max_attempts: 3,
                    retry_interval: Duration::from_millis(500),
                })
            }),
            graphhopper_client: params.graphhopper_api_key.map(|api_key| {
                GraphHopperRouteClient::new(GraphHopperRouteClientParams {
                    api_key,
                    max_paths: 3,
                })
            }),
            osrm_client: OsrmRouteClient::new(OsrmRouteClientParams {
                osrm_url: params.osrm_url,
            }),
            cache,
        }
    }

    /// Route alternatives from `from` to `to`, both `(longitude, latitude)`,
    /// in the provider's order.
    pub async fn fetch_routes(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        provider: &RouteProvider,
    ) -> anyhow::Result<RouteAlternatives> {
        let cacheable = provider.is_cacheable();

        if cacheable {
            match self.cache.get(from, to, provider) {
                Ok(Some(routes)) => {
                    debug!("RouteClient: cache hit for {}", provider.name());
                    return Ok(routes);
                }
                Ok(None) => {}
                Err(err) => debug!("RouteClient: cache unavailable: {}", err),
            }
        }

        let routes = match provider {
            RouteProvider::Mapbox { profile } => {
                let client = self.mapbox_client.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("{} is not set", MAPBOX_ACCESS_TOKEN_ENV_VAR)
                })?;
                client.fetch_routes(from, to, *profile).await?
            }
            RouteProvider::GraphHopperApi { gh_profile } => {
                let client = self.graphhopper_client.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("{} is not set", GRAPHHOPPER_API_KEY_ENV_VAR)
                })?;
                client.fetch_routes(from, to, *gh_profile).await?
            }
            RouteProvider::Osrm { profile } => {
                self.osrm_client.fetch_routes(from, to, profile).await?
            }
            RouteProvider::Custom { routes } => routes.clone(),
        };

        debug!(
            "RouteClient: {} returned {} alternatives",
            provider.name(),
            routes.len()
        );

        if cacheable {
            if let Err(err) = self.cache.cache(from, to, provider, &routes) {
                warn!("RouteClient: could not cache routes: {}", err);
            }
        }

        Ok(routes)
    }
}

/// Whether the error means the provider found no path between the points,
/// as opposed to a failure talking to it.
pub fn is_no_route(error: &anyhow::Error) -> bool {
    matches!(error.downcast_ref::<MapboxError>(), Some(MapboxError::NoRoute(_)))
        || matches!(error.downcast_ref::<OsrmError>(), Some(OsrmError::NoRoute(_)))
        || matches!(
            error.downcast_ref::<GraphHopperError>(),
            Some(GraphHopperError::Api { status: 400, message }) if message.starts_with("Cannot find point")
        )
}

#[cfg(test)]
mod tests {
    use geo_types::Point;

    use super::*;
    use crate::{
        cache::NoCache, mapbox_api::MapboxProfile, route_alternatives::RouteAlternative,
    };

    fn params() -> RouteClientParams {
        RouteClientParams {
            mapbox_access_token: None,
            graphhopper_api_key: None,
            osrm_url: "http://localhost:5000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_custom_routes_are_returned_as_is() {
        let client = RouteClient::new(params(), NoCache);
        let routes = RouteAlternatives {
            routes: vec![
                RouteAlternative {
                    distance: 10_000.0,
                    duration: 1200.0,
                    geometry: None,
                },
                RouteAlternative {
                    distance: 15_000.0,
                    duration: 1200.0,
                    geometry: None,
                },
            ],
        };

        let fetched = client
            .fetch_routes(
                Point::new(4.35, 50.85),
                Point::new(4.30, 50.83),
                &RouteProvider::Custom {
                    routes: routes.clone(),
                },
            )
            .await
            .unwrap();

        assert_eq!(fetched, routes);
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let client = RouteClient::new(params(), NoCache);

        let error = client
            .fetch_routes(
                Point::new(4.35, 50.85),
                Point::new(4.30, 50.83),
                &RouteProvider::Mapbox {
                    profile: MapboxProfile::Driving,
                },
            )
            .await
            .unwrap_err();

        assert!(error.to_string().contains(MAPBOX_ACCESS_TOKEN_ENV_VAR));
        assert!(!is_no_route(&error));
    }

    #[tokio::test]
    async fn test_cached_routes_skip_the_provider() {
        let folder = tempfile::tempdir().unwrap();
        let cache = FileCache::new(folder.path());
        let from = Point::new(4.35, 50.85);
        let to = Point::new(4.30, 50.83);
        let provider = RouteProvider::Mapbox {
            profile: MapboxProfile::Driving,
        };
        let routes = RouteAlternatives {
            routes: vec![RouteAlternative {
                distance: 10_512.4,
                duration: 1_130.9,
                geometry: None,
            }],
        };
        cache.cache(from, to, &provider, &routes).unwrap();

        // no access token: only the cache can answer
        let client = RouteClient::new(params(), cache);
        let fetched = client.fetch_routes(from, to, &provider).await.unwrap();

        assert_eq!(fetched, routes);
    }

    #[tokio::test]
    async fn test_uncacheable_providers_skip_the_cache() {
        let folder = tempfile::tempdir().unwrap();
        let cache = FileCache::new(folder.path());
        let from = Point::new(4.35, 50.85);
        let to = Point::new(4.30, 50.83);
        let traffic = RouteProvider::Mapbox {
            profile: MapboxProfile::DrivingTraffic,
        };
        let stale = RouteAlternatives {
            routes: vec![RouteAlternative {
                distance: 10_512.4,
                duration: 1_130.9,
                geometry: None,
            }],
        };
        cache.cache(from, to, &traffic, &stale).unwrap();

        let client = RouteClient::new(params(), cache);

        // a stored live-traffic response is never served
        let error = client.fetch_routes(from, to, &traffic).await.unwrap_err();
        assert!(error.to_string().contains(MAPBOX_ACCESS_TOKEN_ENV_VAR));

        let custom = RouteProvider::Custom {
            routes: stale.clone(),
        };
        client.fetch_routes(from, to, &custom).await.unwrap();
        assert_eq!(std::fs::read_dir(folder.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_is_no_route() {
        let error = anyhow::Error::from(OsrmError::NoRoute("Impossible route".to_string()));
        assert!(is_no_route(&error));

        let error = anyhow::Error::from(MapboxError::NoRoute("No route found".to_string()));
        assert!(is_no_route(&error));

        let error = anyhow::Error::from(OsrmError::Api {
            status: 502,
            message: String::new(),
        });
        assert!(!is_no_route(&error));
    }
}
