//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so stdout stays the content inventory printed by
//! [`crate::output`]. `RUST_LOG` wins when set; otherwise only warnings are
//! shown, or everything from `debug` up with `--verbose`.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Filter used when `RUST_LOG` is unset or unparsable.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global fmt subscriber writing to stderr.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
