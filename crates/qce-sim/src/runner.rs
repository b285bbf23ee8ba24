//! The simulation runner.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::SimResult;

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationStatus {
    Success,
}

/// Report returned by [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub status: SimulationStatus,
    pub message: String,
}

/// A configured simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Validate `config` and create a simulation from it.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        info!("Simulation initialized with config: {}", config);
        Ok(Self { config })
    }

    /// The configuration this simulation runs with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation.
    pub fn run(&self) -> SimulationReport {
        info!(name = %self.config.name, "Running simulation...");
        if self.config.debug_mode {
            debug!(iterations = self.config.iterations, "debug mode enabled");
        }

        SimulationReport {
            status: SimulationStatus::Success,
            message: "Simulation completed".to_string(),
        }
    }
}
