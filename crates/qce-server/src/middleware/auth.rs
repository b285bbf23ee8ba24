//! Bearer-token authentication.
//!
//! [`authenticate`] is installed with `axum::middleware::from_fn_with_state`
//! on the routes that need a user. It checks the `Authorization` header,
//! hands the token to the configured [`TokenValidator`] and, on success,
//! stores the [`User`] in the request extensions where the [`AuthUser`]
//! extractor picks it up.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Json,
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

/// Token accepted by [`DevTokenValidator`].
pub const DEV_TOKEN: &str = "test-token";

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Reasons a request fails authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no authorization header provided")]
    MissingHeader,

    #[error("invalid authorization header format")]
    InvalidFormat,

    #[error("invalid authentication token")]
    InvalidToken,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(AuthErrorBody {
                error: "Authentication required",
            }),
        )
            .into_response()
    }
}

/// Resolves bearer tokens to users.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Return the user the token belongs to, or [`AuthError::InvalidToken`].
    async fn validate(&self, token: &str) -> Result<User, AuthError>;
}

/// Development validator that accepts only [`DEV_TOKEN`].
// TODO: replace with signed JWT validation once the login endpoint issues tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevTokenValidator;

#[async_trait]
impl TokenValidator for DevTokenValidator {
    async fn validate(&self, token: &str) -> Result<User, AuthError> {
        if token == DEV_TOKEN {
            Ok(User {
                id: "test-user-id".to_string(),
                email: "test@example.com".to_string(),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` value.
///
/// The value must be exactly two space-separated parts, the first being
/// `Bearer`. An empty token passes this check and is left to the validator.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] => Ok(*token),
        _ => Err(AuthError::InvalidFormat),
    }
}

/// Pull the bearer token out of the request headers.
///
/// An absent or empty `Authorization` value is [`AuthError::MissingHeader`].
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingHeader)
        .and_then(|value| value.to_str().map_err(|_| AuthError::InvalidFormat))
        .and_then(parse_bearer)
        .map(str::to_owned)
}

/// Authentication middleware.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    // Owned so no borrow of the request is held across the validator await.
    let token = bearer_token(req.headers());

    let result = match token {
        Ok(token) => state.validator.validate(&token).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            let remote_addr = req
                .extensions()
                .get::<ConnectInfo<std::net::SocketAddr>>()
                .map(|ci| ci.0.to_string())
                .unwrap_or_default();
            info!(
                error = %err,
                path = %req.uri().path(),
                method = %req.method(),
                remote_addr = %remote_addr,
                "Authentication failed"
            );
            err.into_response()
        }
    }
}

/// Extractor for the user stored by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::MissingHeader)
    }
}
