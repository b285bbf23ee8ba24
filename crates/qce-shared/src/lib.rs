//! Code shared between the Quantum Circuit Editor crates.
//!
//! Every other crate in the workspace reaches this one through the single
//! `qce-shared` entry in `[workspace.dependencies]`, so moving it means
//! touching one line of the root manifest.
//!
//! - [`dto`] holds the JSON bodies that more than one crate produces.
//! - [`testing`] holds the setup hook that every test file runs first.

pub mod dto;
pub mod testing;

pub use dto::{ErrorBody, HealthResponse};
