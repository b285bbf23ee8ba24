//! Health check endpoint.

use axum::Json;
use qce_shared::HealthResponse;

/// GET /health - Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok(env!("CARGO_PKG_VERSION")))
}
