//! Authenticated user endpoint.

use axum::Json;

use crate::middleware::auth::{AuthUser, User};

/// GET /api/v1/me - The user the bearer token belongs to.
pub async fn current_user(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}
