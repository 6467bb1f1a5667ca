use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps request-path errors to HTTP status codes and formats them as JSON
/// responses. The only error this service can produce per-request is a miss
/// against the fixed route set; startup errors (bind, config) propagate as
/// `anyhow::Error` out of main instead.
#[derive(Debug)]
pub enum ApiError {
    /// Request did not match any registered method+path
    RouteNotFound { method: String, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("No route for {} {}", method, path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
