//! Quantum Circuit Editor backend - HTTP service for the editor front end.
//!
//! The service currently provides:
//!
//! - The root view at `/`, rendered server-side from [`qce_view::root_view`]
//! - A health check at `/health`
//! - Reserved `/api/v1` routes for auth, circuits, simulation and export,
//!   which answer `501 Not Implemented` until their handlers land
//! - Request logging with per-request ids, bearer-token authentication and CORS
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qce_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod server;
pub mod state;

pub use config::{ServerArgs, ServerConfig};
pub use error::ApiError;
pub use middleware::auth::{AuthError, AuthUser, DevTokenValidator, TokenValidator, User};
pub use middleware::request_log::RequestId;
pub use server::{create_router, serve, serve_router, serve_with_shutdown, shutdown_signal, with_layers};
pub use state::AppState;
