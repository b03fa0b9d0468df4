//! Diagnostic logging
//!
//! Human-facing output goes to stdout; tracing events go to stderr so they
//! never mix with command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `spendlimit=debug`
pub const LOG_ENV: &str = "SPENDLIMIT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `SPENDLIMIT_LOG`, falling back to `warn`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; later calls are no-ops
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
