//! # Error Response
//!
//! Structured 400-class error body for a failed calculation.
//!
//! Transports (HTTP handlers, the CLI) serialize this body as-is. Every
//! [`CalculationError`] maps to status `400`; the error code and category
//! let clients branch without parsing the message.
//!
//! # Examples
//!
//! ```
//! use safe_calc::api::error_response::ErrorResponse;
//! use safe_calc::domain::errors::CalculationError;
//! use safe_calc::domain::value_objects::Timestamp;
//!
//! let err = CalculationError::DivisionByZero { dividend: 10.0 };
//! let body = ErrorResponse::from_error(&err, Timestamp::now());
//! assert_eq!(body.status_code(), 400);
//! assert_eq!(body.error_code(), "DIVISION_BY_ZERO");
//! assert_eq!(body.message(), "Cannot divide by zero");
//! ```

use crate::application::error::InfrastructureError;
use crate::domain::errors::{CalculationError, ErrorCategory, ErrorKind};
use crate::domain::value_objects::operation::Operation;
use crate::domain::value_objects::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// HTTP status used for every calculation failure.
pub const BAD_REQUEST: u16 = 400;

const BAD_REQUEST_LABEL: &str = "Bad Request";

/// Offending values attached to an error body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Operand that triggered the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand: Option<f64>,
    /// Out-of-range result. Non-finite results are omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
}

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    status_code: u16,
    timestamp: Timestamp,
    message: String,
    error: String,
    error_code: String,
    category: ErrorCategory,
    description: String,
    operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<ErrorDetails>,
}

impl ErrorResponse {
    /// Builds the body for `err`, stamped with `timestamp`.
    #[must_use]
    pub fn from_error(err: &CalculationError, timestamp: Timestamp) -> Self {
        let operand = err.operand();
        let result = err.result().filter(|r| r.is_finite());
        let details = (operand.is_some() || result.is_some())
            .then_some(ErrorDetails { operand, result });

        Self {
            status_code: BAD_REQUEST,
            timestamp,
            message: err.reason().to_string(),
            error: BAD_REQUEST_LABEL.to_string(),
            error_code: err.error_code().to_string(),
            category: err.category(),
            description: describe(err.kind()).to_string(),
            operation: err.operation(),
            details,
        }
    }

    /// Serializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Serialization`] if encoding fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, InfrastructureError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// When the error was produced.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The error's reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status label, e.g. `Bad Request`.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Machine-readable code.
    #[must_use]
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Longer explanation of the error kind.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The failed operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Offending operand or result, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&ErrorDetails> {
        self.details.as_ref()
    }
}

impl From<&CalculationError> for ErrorResponse {
    fn from(err: &CalculationError) -> Self {
        Self::from_error(err, Timestamp::now())
    }
}

fn describe(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidOperand => "An operand failed validation before the operation ran",
        ErrorKind::InvalidOperation => "The operation is not defined for the given operand",
        ErrorKind::DivisionByZero => "Division by zero is undefined",
        ErrorKind::ModuloByZero => "Modulo by zero is undefined",
        ErrorKind::Overflow => "The result exceeds the maximum safe integer",
        ErrorKind::Underflow => "The result is below the minimum safe integer",
        ErrorKind::InvalidResult => "The operation did not produce a finite number",
    }
}
