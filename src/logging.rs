//! Tracing subscriber setup shared by the binary and tests.

use tracing_subscriber::{fmt, EnvFilter};

use crate::types::GraphError;

/// Installs a stderr `fmt` subscriber filtered by `level` (any `EnvFilter` directive).
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] for an unparsable filter or when a global
/// subscriber is already installed.
pub fn init_logging(level: &str) -> Result<(), GraphError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_new(level)
                .map_err(|e| GraphError::InvalidArgument(format!("invalid log level: {e}")))?,
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| GraphError::InvalidArgument("logging already initialized".into()))
}
