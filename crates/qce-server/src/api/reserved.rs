//! Routes that are part of the API surface but have no handler yet.
//!
//! Login/logout, circuit CRUD, simulation and QASM export all answer
//! `501 Not Implemented` so clients can be built against the final paths.

use axum::http::Uri;

use crate::error::ApiError;

/// Handler for every reserved route.
pub async fn not_implemented() -> ApiError {
    ApiError::NotImplemented
}

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
