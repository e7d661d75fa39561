//! Tracing subscriber setup for the binary

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`
///
/// Falls back to `info`, or `warn` when `quiet` is set. Calling this again
/// after a subscriber is installed has no effect.
pub fn init(quiet: bool) {
    let fallback = if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
