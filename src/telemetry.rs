//! Logging initialisation.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Error returned when the global subscriber cannot be installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryInitError(#[from] tracing_subscriber::util::TryInitError);

/// Installs a stderr `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `default_directive` (see [`crate::config::AppConfig::log_directive`]).
///
/// # Errors
///
/// Returns [`TelemetryInitError`] when a global subscriber is already set.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn second_initialisation_reports_an_error() {
        drop(init_tracing("collabworks=debug"));
        assert!(init_tracing("collabworks=debug").is_err());
    }
}
