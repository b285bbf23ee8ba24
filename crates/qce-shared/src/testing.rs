//! Test setup hook.
//!
//! Call [`init_test_tracing`] at the top of every test (or from a shared
//! helper). The first call installs a `tracing` subscriber that writes
//! through the libtest capture, later calls are no-ops.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_TEST_FILTER: &str = "warn";

/// Install the test subscriber once per process.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        // Another harness may already own the global default; that is fine.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}
