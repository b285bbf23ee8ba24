//! `qce-sim` — simulation runner for the Quantum Circuit Editor.
//!
//! The runner does not evolve any state yet: it validates its configuration,
//! logs it, and reports success. It exists so the backend and the tooling
//! around it can be wired against a stable API before a real simulator lands.
//!
//! # Quick start
//!
//! ```rust
//! use qce_sim::{Simulation, SimulationConfig, SimulationStatus};
//!
//! let sim = Simulation::new(SimulationConfig::default()).unwrap();
//! let report = sim.run();
//! assert_eq!(report.status, SimulationStatus::Success);
//! ```

pub mod config;
pub mod error;
pub mod runner;

pub use config::SimulationConfig;
pub use error::{SimError, SimResult};
pub use runner::{Simulation, SimulationReport, SimulationStatus};
