//! Error types for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qce_shared::ErrorBody;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The route is reserved but has no handler yet.
    #[error("Not implemented yet")]
    NotImplemented,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("not_found", self.to_string()),
            ),
            ApiError::NotImplemented => (StatusCode::NOT_IMPLEMENTED, ErrorBody::not_implemented()),
        };

        (status, Json(body)).into_response()
    }
}
