//! Logging setup

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Logging errors
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directives did not parse
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),
}

/// Install the global `tracing` subscriber
///
/// Logs go to stderr, filtered by `filter` (e.g. `info` or
/// `app_state=debug`). Returns `false` if a subscriber was already
/// installed, which leaves the existing one in place.
pub fn init_logging(filter: &str) -> Result<bool, LoggingError> {
    let filter = EnvFilter::try_new(filter)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    Ok(installed)
}
