use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

use crate::state::AppState;

const OPENAPI_JSON_PATH: &str = "/docs/private/api.json";

pub fn docs_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON_PATH)
                    .with_title("ecoroute emissions API")
                    .axum_handler(),
                |op| op.description("Reference for the emissions and routes endpoints."),
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(OPENAPI_JSON_PATH)
                    .with_title("ecoroute emissions API")
                    .axum_handler(),
                |op| op.description("Swagger UI to try the endpoints from the browser."),
            ),
        )
        .route("/private/api.json", get(serve_docs))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

/// The OpenAPI document built by `finish_api_with` in `main`.
async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
