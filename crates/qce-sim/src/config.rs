//! Simulation configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Default simulation name.
pub const DEFAULT_NAME: &str = "default-simulation";

/// Default iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Configuration for a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Name used in log lines and reports.
    pub name: String,
    /// Number of iterations to run.
    pub iterations: u32,
    /// Enables verbose logging of each run.
    pub debug_mode: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            iterations: DEFAULT_ITERATIONS,
            debug_mode: false,
        }
    }
}

impl SimulationConfig {
    /// Check that the configuration can be run.
    pub fn validate(&self) -> SimResult<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::EmptyName);
        }
        if self.iterations == 0 {
            return Err(SimError::InvalidIterations(self.iterations));
        }
        Ok(())
    }
}

// `debug_mode` is not part of the display form.
impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimulationConfig(name={}, iterations={})",
            self.name, self.iterations
        )
    }
}
