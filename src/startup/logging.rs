//! Tracing subscriber setup for the binary.

use tracing_subscriber::prelude::*;

/// Install the global subscriber: `RUST_LOG` filter (default `info`) and a
/// fmt layer on stderr so log lines never mix with the dashboard output.
pub fn configure_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
