//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSection, MockConfig};

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to the
/// configured level.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(logging: &LoggingSection) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Subscriber for unit tests: output goes through the test harness capture so
/// it only shows for failing tests. Safe to call from every test.
pub fn init_test_tracing() {
    let level = MockConfig::default().logging.level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
