//! Logging setup for the command-line binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. Output goes to stderr so table and JSON output on stdout
//! stay machine-readable.

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Level used when neither RUST_LOG, `--log-level` nor the config file set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter: RUST_LOG wins, otherwise `level` plus quiet defaults
/// for the embedded engine.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, Box<dyn Error>> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    filter_for_level(level)
}

fn filter_for_level(level: &str) -> Result<EnvFilter, Box<dyn Error>> {
    let directives = format!("{},cozo=warn", level);
    EnvFilter::try_new(&directives)
        .map_err(|e| format!("Invalid log level '{}': {}", level, e).into())
}

/// Install the global subscriber.
///
/// Fails if `level` is not a valid filter or a subscriber is already set.
pub fn init_logging(level: &str) -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level)?)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {}", e).into())
}
