//! Shared setup for the integration tests.

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test writer so failure events show up
/// next to the failing test. Safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contextspec=debug")),
        )
        .with_test_writer()
        .try_init();
}
