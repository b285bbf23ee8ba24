//! JSON bodies shared across the workspace.

use serde::{Deserialize, Serialize};

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Version of the responding component.
    pub version: String,
}

impl HealthResponse {
    /// A healthy response reporting `version`.
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: version.into(),
        }
    }
}

// ============================================================================
// Error body
// ============================================================================

/// The `{ "error": ..., "message": ... }` body returned on failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Body for routes that are reserved but have no handler yet.
    pub fn not_implemented() -> Self {
        Self::new(
            "Not implemented yet",
            "This endpoint is planned but not yet available",
        )
    }
}
