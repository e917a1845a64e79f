//! Tracing subscriber installation.

use crate::config::LoggingSettings;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directives do not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingSettings::level`].
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the configured level does
/// not parse, or [`TelemetryError::Install`] when a subscriber is already
/// set.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| level_filter(&settings.level))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(TelemetryError::Install)
}

fn level_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}
