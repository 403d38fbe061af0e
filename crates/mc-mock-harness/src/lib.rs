//! Test harness for the mock item layer: TOML configuration and tracing setup.

pub mod config;
pub mod logging;

pub use config::{ConfigError, MockConfig};
pub use logging::{init_test_tracing, init_tracing};
