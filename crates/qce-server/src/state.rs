//! Application state for the HTTP server.

use std::sync::Arc;

use qce_view::{render_document, root_view};

use crate::config::ServerConfig;
use crate::middleware::auth::{DevTokenValidator, TokenValidator};

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// Validates bearer tokens for authenticated routes.
    pub validator: Arc<dyn TokenValidator>,
    /// Root view rendered once at startup.
    pub index_html: String,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            config,
            validator: Arc::new(DevTokenValidator),
            index_html: render_document(&root_view()),
        }
    }

    /// Replace the token validator.
    pub fn with_validator(mut self, validator: Arc<dyn TokenValidator>) -> Self {
        self.validator = validator;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
