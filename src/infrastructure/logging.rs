//! # Logging
//!
//! Subscriber setup and a [`DiagnosticSink`] that forwards to `tracing`.

use crate::application::error::InfrastructureError;
use crate::application::services::diagnostics::DiagnosticSink;
use crate::domain::errors::CalculationError;
use crate::domain::value_objects::operation::Operation;
use crate::infrastructure::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. Logs go to stderr so
/// stdout stays reserved for results.
///
/// # Errors
///
/// Returns [`InfrastructureError::Logging`] if the level is not a valid
/// filter directive or a subscriber is already installed.
pub fn init(settings: &LoggingSettings) -> Result<(), InfrastructureError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| InfrastructureError::logging(format!("invalid level: {e}")))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| InfrastructureError::logging(e.to_string()))
}

/// Reports calculations as tracing events.
///
/// Successes are logged at `DEBUG`, failures at `WARN` with the error code.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn calculation_succeeded(&self, operation: Operation, result: f64) {
        tracing::debug!(%operation, result, "calculation succeeded");
    }

    fn calculation_failed(&self, operation: Operation, error: &CalculationError) {
        tracing::warn!(
            %operation,
            error_code = error.error_code(),
            reason = error.reason(),
            "calculation failed"
        );
    }
}
