//! Quantum Circuit Editor simulation runner binary.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qce_sim::{Simulation, SimulationConfig};

/// Run a simulation and print its report as JSON.
#[derive(Parser)]
#[command(name = "qce-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Simulation name
    #[arg(long, env = "QCE_SIM_NAME", default_value = qce_sim::config::DEFAULT_NAME)]
    name: String,

    /// Number of iterations
    #[arg(long, env = "QCE_SIM_ITERATIONS", default_value_t = qce_sim::config::DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "qce_sim=debug" } else { "qce_sim=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sim = Simulation::new(SimulationConfig {
        name: cli.name,
        iterations: cli.iterations,
        debug_mode: cli.debug,
    })?;

    let report = sim.run();
    tracing::info!(status = ?report.status, "Simulation result: {}", report.message);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
