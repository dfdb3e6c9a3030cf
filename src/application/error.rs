//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Calculation(CalculationError)       - operation failed
//! ├── UnknownOperation(UnknownOperation)  - operation name not recognised
//! ├── Infrastructure(InfrastructureError) - configuration or logging setup
//! └── Validation(ValidationFailure)      - value rejected by a policy check
//! ```
//!
//! # Examples
//!
//! ```
//! use safe_calc::application::error::{ApplicationError, InfrastructureError};
//! use safe_calc::domain::errors::CalculationError;
//!
//! let err: ApplicationError = CalculationError::DivisionByZero { dividend: 1.0 }.into();
//! assert!(err.is_client_error());
//!
//! let err: ApplicationError = InfrastructureError::configuration("bad file").into();
//! assert!(!err.is_client_error());
//! ```

use crate::domain::errors::CalculationError;
use crate::domain::validation::ValidationFailure;
use crate::domain::value_objects::operation::UnknownOperation;
use thiserror::Error;

/// Infrastructure layer error.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl InfrastructureError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a logging error.
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The calculation failed.
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// The requested operation does not exist.
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    /// Infrastructure failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// A value was rejected by a validation policy.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationFailure),
}

impl ApplicationError {
    /// Returns the calculation error, if that is what failed.
    #[must_use]
    pub fn as_calculation(&self) -> Option<&CalculationError> {
        match self {
            Self::Calculation(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the caller's input caused the failure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Calculation(_) | Self::UnknownOperation(_) | Self::Validation(_)
        )
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationIssue;
    use crate::domain::value_objects::operation::Operation;

    #[test]
    fn infrastructure_error_messages() {
        let err = InfrastructureError::configuration("missing key");
        assert_eq!(err.to_string(), "configuration error: missing key");
        let err = InfrastructureError::logging("already set");
        assert!(err.to_string().contains("logging"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<f64>("nope").unwrap_err();
        let err: InfrastructureError = json_err.into();
        assert!(err.to_string().starts_with("serialization error"));
    }

    #[test]
    fn calculation_errors_are_client_errors() {
        let err: ApplicationError =
            CalculationError::invalid_operand(Operation::Add, "First operand must be finite")
                .into();
        assert!(err.is_client_error());
        assert!(err.as_calculation().is_some());
        assert!(err.to_string().contains("First operand must be finite"));
    }

    #[test]
    fn unknown_operation_is_transparent() {
        let err: ApplicationError = UnknownOperation("log".to_string()).into();
        assert_eq!(err.to_string(), "unknown operation: log");
        assert!(err.is_client_error());
    }

    #[test]
    fn infrastructure_is_not_client_error() {
        let err: ApplicationError = InfrastructureError::configuration("x").into();
        assert!(!err.is_client_error());
        assert!(err.as_calculation().is_none());
    }

    #[test]
    fn validation_failure_converts() {
        let failure =
            ValidationFailure::new(ValidationIssue::NotInteger, "Count must be an integer");
        let err: ApplicationError = failure.into();
        assert_eq!(err.to_string(), "validation error: Count must be an integer");
        assert!(err.is_client_error());
    }
}
