pub mod fixtures;
pub mod source_server;

pub use fixtures::*;
pub use source_server::{DATA_PATH, SCHEMA_PATH, TestSourceServer};

/// Install a test-friendly tracing subscriber. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with_test_writer()
        .try_init();
}
