use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ecoroute_emissions::error::EmissionsError;
use ecoroute_route_providers::route_client::is_no_route;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        if is_no_route(&error) {
            return ApiError::NotFound(error.to_string());
        }

        match error.downcast::<EmissionsError>() {
            Ok(error) => error.into(),
            Err(error) => ApiError::InternalServerError(format!("{:#}", error)),
        }
    }
}

impl From<EmissionsError> for ApiError {
    fn from(error: EmissionsError) -> Self {
        match error {
            EmissionsError::InvalidArgument(_) => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}

impl aide::OperationOutput for ApiError {
    type Inner = Self;
}
