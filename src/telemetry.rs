//! Log subscriber setup for binaries and test harnesses embedding the board.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryInitError(String);

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (for example `"taskboard=info"`).
///
/// # Errors
///
/// Returns [`TelemetryInitError`] when a global subscriber already exists.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| TelemetryInitError(err.to_string()))
}
