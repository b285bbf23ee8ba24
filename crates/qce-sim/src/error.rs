//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while setting up a simulation.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// At least one iteration is required.
    #[error("iterations must be at least 1, got {0}")]
    InvalidIterations(u32),

    /// The simulation needs a name for its log lines.
    #[error("simulation name must not be empty")]
    EmptyName,
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
