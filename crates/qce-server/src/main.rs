//! Quantum Circuit Editor backend binary entry point.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qce_server::{AppState, ServerArgs, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qce_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ServerArgs::parse();
    if args.uses_default_port() {
        tracing::info!(
            port = qce_server::config::DEFAULT_PORT,
            "No PORT environment variable found, using default"
        );
    }
    let config = args.into_config();

    let state = Arc::new(AppState::with_config(config));
    serve(state).await
}
