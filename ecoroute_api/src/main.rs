mod docs;
mod emissions;
mod error;
mod routes;
mod state;

use crate::docs::docs_routes;
use crate::emissions::post_emissions::post_emissions_handler;
use crate::routes::post_routes::post_routes_handler;
use crate::state::AppState;
use aide::axum::routing::post_with;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, serve};
use ecoroute_route_providers::route_client::RouteClient;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const API_ADDR_ENV_VAR: &str = "ECOROUTE_API_ADDR";
const DEFAULT_API_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let state = Arc::new(AppState {
        route_client: RouteClient::default(),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();
    let app = api_router(state.clone(), &mut api);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        std::fs::write("schemas/openapi.json", serde_json::to_string_pretty(&api)?)?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state);

    let addr = std::env::var(API_ADDR_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn api_router(state: Arc<AppState>, api: &mut OpenApi) -> axum::Router<Arc<AppState>> {
    aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state))
        .api_route(
            "/emissions",
            post_with(post_emissions_handler, |op| {
                op.tag("emissions").description(
                    "CO₂ emitted and saved for each route alternative of one vehicle.",
                )
            }),
        )
        .api_route(
            "/routes",
            post_with(post_routes_handler, |op| {
                op.tag("routes").description(
                    "Fetch route alternatives from a provider and estimate their emissions.",
                )
            }),
        )
        .finish_api_with(api, api_docs)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("ecoroute Open API")
        .summary("Vehicle CO₂ estimates for route alternatives")
        .description(
            "`POST /emissions` estimates routes given as distance and duration. \
             `POST /routes` fetches alternatives from Mapbox, GraphHopper or OSRM first. \
             Saved CO₂ compares each route against a gas-equivalent or worst-alternative baseline.",
        )
}

#[cfg(test)]
mod tests {
    use ecoroute_route_providers::{
        cache::FileCache,
        route_client::{RouteClient, RouteClientParams},
    };

    use super::*;

    #[test]
    fn test_openapi_documents_both_endpoints() {
        let state = Arc::new(AppState {
            route_client: RouteClient::new(
                RouteClientParams {
                    mapbox_access_token: None,
                    graphhopper_api_key: None,
                    osrm_url: "http://localhost:5000".to_string(),
                },
                FileCache::default(),
            ),
        });
        let mut api = OpenApi::default();
        let _ = api_router(state, &mut api);

        let api = serde_json::to_value(&api).unwrap();
        assert_eq!(api["info"]["title"], "ecoroute Open API");
        assert!(
            api["info"]["description"]
                .as_str()
                .unwrap()
                .contains("POST /routes")
        );
        assert_eq!(api["paths"]["/emissions"]["post"]["tags"][0], "emissions");
        assert_eq!(api["paths"]["/routes"]["post"]["tags"][0], "routes");
    }
}
