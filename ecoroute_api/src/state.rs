use ecoroute_route_providers::route_client::RouteClient;

pub struct AppState {
    pub route_client: RouteClient,
}
