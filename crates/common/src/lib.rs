//! Shared configuration and logging setup.

mod environment;

pub use environment::{BingxEnvironment, ParseEnvironmentError};

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` for filtering; defaults to `info` when unset.
/// Call once from the binary entry point.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
