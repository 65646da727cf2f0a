//! Tracing setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "FAQ_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `FAQ_LOG` (default `warn`).
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place. Stdout stays reserved for command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
