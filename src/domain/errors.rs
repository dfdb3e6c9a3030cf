//! # Calculation Errors
//!
//! The closed taxonomy of reasons a calculation can fail.
//!
//! # Error Hierarchy
//!
//! ```text
//! CalculationError
//! ├── InvalidOperand     - operand failed validation          (Operand)
//! ├── InvalidOperation   - operand outside operation domain   (Domain)
//! ├── DivisionByZero     - divide with zero divisor           (Domain)
//! ├── ModuloByZero       - modulo with zero divisor           (Domain)
//! ├── Overflow           - finite result above SAFE_MAX       (Limit)
//! ├── Underflow          - finite result below SAFE_MIN       (Limit)
//! └── InvalidResult      - result is NaN or infinite          (Result)
//! ```
//!
//! # Examples
//!
//! ```
//! use safe_calc::domain::errors::{CalculationError, ErrorCategory, ErrorKind};
//!
//! let err = CalculationError::DivisionByZero { dividend: 10.0 };
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//! assert_eq!(err.kind().code(), "DIVISION_BY_ZERO");
//! assert_eq!(err.category(), ErrorCategory::Domain);
//! ```

use crate::domain::value_objects::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Discriminant of a [`CalculationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// See [`CalculationError::InvalidOperand`].
    InvalidOperand,
    /// See [`CalculationError::InvalidOperation`].
    InvalidOperation,
    /// See [`CalculationError::DivisionByZero`].
    DivisionByZero,
    /// See [`CalculationError::ModuloByZero`].
    ModuloByZero,
    /// See [`CalculationError::Overflow`].
    Overflow,
    /// See [`CalculationError::Underflow`].
    Underflow,
    /// See [`CalculationError::InvalidResult`].
    InvalidResult,
}

impl ErrorKind {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidOperand => "INVALID_OPERAND",
            Self::InvalidOperation => "INVALID_OPERATION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::ModuloByZero => "MODULO_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::Underflow => "UNDERFLOW",
            Self::InvalidResult => "INVALID_RESULT",
        }
    }

    /// Category the kind belongs to.
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::InvalidOperand => ErrorCategory::Operand,
            Self::InvalidOperation | Self::DivisionByZero | Self::ModuloByZero => {
                ErrorCategory::Domain
            }
            Self::Overflow | Self::Underflow => ErrorCategory::Limit,
            Self::InvalidResult => ErrorCategory::Result,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Coarse grouping used to pick a handling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// The caller supplied a malformed operand.
    Operand,
    /// The operand is well-formed but the operation is undefined for it.
    Domain,
    /// The result falls outside the safe-integer interval.
    Limit,
    /// The result is not a finite number.
    Result,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand => write!(f, "OPERAND"),
            Self::Domain => write!(f, "DOMAIN"),
            Self::Limit => write!(f, "LIMIT"),
            Self::Result => write!(f, "RESULT"),
        }
    }
}

/// Error returned by every arithmetic operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// An operand failed validation.
    #[error("invalid operand for {operation}: {reason}")]
    InvalidOperand {
        /// Operation that rejected the operand.
        operation: Operation,
        /// Validator's reason.
        reason: String,
    },

    /// The operation is undefined for an otherwise valid operand.
    #[error("invalid operation {operation}: {reason}")]
    InvalidOperation {
        /// Operation that was attempted.
        operation: Operation,
        /// Why the operand is outside the domain.
        reason: String,
        /// The offending operand.
        operand: f64,
    },

    /// Division with a zero divisor.
    #[error("division by zero: cannot divide {dividend} by zero")]
    DivisionByZero {
        /// The dividend.
        dividend: f64,
    },

    /// Modulo with a zero divisor.
    #[error("modulo by zero: cannot compute {dividend} modulo zero")]
    ModuloByZero {
        /// The dividend.
        dividend: f64,
    },

    /// Finite result above the safe-integer interval.
    #[error("overflow in {operation}: {reason}")]
    Overflow {
        /// Operation that produced the result.
        operation: Operation,
        /// Description of the violation.
        reason: String,
        /// The rejected result.
        result: f64,
    },

    /// Finite result below the safe-integer interval.
    #[error("underflow in {operation}: {reason}")]
    Underflow {
        /// Operation that produced the result.
        operation: Operation,
        /// Description of the violation.
        reason: String,
        /// The rejected result.
        result: f64,
    },

    /// Result is NaN or infinite.
    #[error("invalid result for {operation}: {reason}")]
    InvalidResult {
        /// Operation that produced the result.
        operation: Operation,
        /// Description of the violation.
        reason: String,
        /// The rejected result.
        result: f64,
    },
}

impl CalculationError {
    /// Creates an invalid operand error.
    #[must_use]
    pub fn invalid_operand(operation: Operation, reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an invalid operation error.
    #[must_use]
    pub fn invalid_operation(
        operation: Operation,
        operand: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOperation {
            operation,
            reason: reason.into(),
            operand,
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: Operation, result: f64, reason: impl Into<String>) -> Self {
        Self::Overflow {
            operation,
            reason: reason.into(),
            result,
        }
    }

    /// Creates an underflow error.
    #[must_use]
    pub fn underflow(operation: Operation, result: f64, reason: impl Into<String>) -> Self {
        Self::Underflow {
            operation,
            reason: reason.into(),
            result,
        }
    }

    /// Creates an invalid result error.
    #[must_use]
    pub fn invalid_result(operation: Operation, result: f64, reason: impl Into<String>) -> Self {
        Self::InvalidResult {
            operation,
            reason: reason.into(),
            result,
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperand { .. } => ErrorKind::InvalidOperand,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::ModuloByZero { .. } => ErrorKind::ModuloByZero,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::Underflow { .. } => ErrorKind::Underflow,
            Self::InvalidResult { .. } => ErrorKind::InvalidResult,
        }
    }

    /// Returns the category of this error.
    #[inline]
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind().category()
    }

    /// Returns the machine-readable code, e.g. `DIVISION_BY_ZERO`.
    #[inline]
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::InvalidOperand { operation, .. }
            | Self::InvalidOperation { operation, .. }
            | Self::Overflow { operation, .. }
            | Self::Underflow { operation, .. }
            | Self::InvalidResult { operation, .. } => *operation,
            Self::DivisionByZero { .. } => Operation::Divide,
            Self::ModuloByZero { .. } => Operation::Modulo,
        }
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidOperand { reason, .. }
            | Self::InvalidOperation { reason, .. }
            | Self::Overflow { reason, .. }
            | Self::Underflow { reason, .. }
            | Self::InvalidResult { reason, .. } => reason,
            Self::DivisionByZero { .. } => "Cannot divide by zero",
            Self::ModuloByZero { .. } => "Cannot perform modulo by zero",
        }
    }

    /// Returns the operand that caused the error, if recorded.
    #[must_use]
    pub const fn operand(&self) -> Option<f64> {
        match self {
            Self::InvalidOperation { operand, .. } => Some(*operand),
            Self::DivisionByZero { dividend } | Self::ModuloByZero { dividend } => Some(*dividend),
            _ => None,
        }
    }

    /// Returns the rejected result, if one was computed.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        match self {
            Self::Overflow { result, .. }
            | Self::Underflow { result, .. }
            | Self::InvalidResult { result, .. } => Some(*result),
            _ => None,
        }
    }

    /// Returns true if the caller passed a malformed operand.
    #[inline]
    #[must_use]
    pub const fn is_operand_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Operand)
    }

    /// Returns true if the operation is undefined for the operand.
    #[inline]
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Domain)
    }

    /// Returns true if the computed result was rejected.
    #[inline]
    #[must_use]
    pub const fn is_result_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Limit | ErrorCategory::Result)
    }
}

/// Result type for calculations.
pub type CalculationResult<T> = Result<T, CalculationError>;

#[cfg(test)]
mod tests {
    use super::*;

    mod kind {
        use super::*;

        #[test]
        fn codes_are_screaming_snake_case() {
            assert_eq!(ErrorKind::InvalidOperand.code(), "INVALID_OPERAND");
            assert_eq!(ErrorKind::ModuloByZero.code(), "MODULO_BY_ZERO");
            assert_eq!(ErrorKind::InvalidResult.to_string(), "INVALID_RESULT");
        }

        #[test]
        fn categories() {
            assert_eq!(ErrorKind::InvalidOperand.category(), ErrorCategory::Operand);
            assert_eq!(ErrorKind::InvalidOperation.category(), ErrorCategory::Domain);
            assert_eq!(ErrorKind::DivisionByZero.category(), ErrorCategory::Domain);
            assert_eq!(ErrorKind::Overflow.category(), ErrorCategory::Limit);
            assert_eq!(ErrorKind::Underflow.category(), ErrorCategory::Limit);
            assert_eq!(ErrorKind::InvalidResult.category(), ErrorCategory::Result);
        }

        #[test]
        fn serde_uses_codes() {
            let json = serde_json::to_string(&ErrorKind::DivisionByZero).ok();
            assert_eq!(json.as_deref(), Some("\"DIVISION_BY_ZERO\""));
        }
    }

    mod calculation_error {
        use super::*;

        #[test]
        fn display_includes_operation_and_reason() {
            let err = CalculationError::invalid_operand(
                Operation::Add,
                "First operand must be a valid number, not NaN",
            );
            assert_eq!(
                err.to_string(),
                "invalid operand for add: First operand must be a valid number, not NaN"
            );

            let err = CalculationError::DivisionByZero { dividend: 7.0 };
            assert_eq!(err.to_string(), "division by zero: cannot divide 7 by zero");
        }

        #[test]
        fn zero_divisor_errors_know_their_operation() {
            let div = CalculationError::DivisionByZero { dividend: 1.0 };
            let modulo = CalculationError::ModuloByZero { dividend: 1.0 };
            assert_eq!(div.operation(), Operation::Divide);
            assert_eq!(modulo.operation(), Operation::Modulo);
            assert_eq!(div.operand(), Some(1.0));
            assert_eq!(modulo.reason(), "Cannot perform modulo by zero");
            assert_eq!(modulo.error_code(), "MODULO_BY_ZERO");
        }

        #[test]
        fn result_context_is_exposed() {
            let err = CalculationError::overflow(Operation::Multiply, 1e20, "too big");
            assert_eq!(err.result(), Some(1e20));
            assert_eq!(err.operand(), None);
            assert!(err.is_result_error());
            assert!(!err.is_operand_error());
        }

        #[test]
        fn category_predicates() {
            assert!(CalculationError::invalid_operand(Operation::Sqrt, "x").is_operand_error());
            assert!(
                CalculationError::invalid_operation(Operation::Sqrt, -1.0, "negative")
                    .is_domain_error()
            );
            assert!(
                CalculationError::invalid_result(Operation::Power, f64::NAN, "nan")
                    .is_result_error()
            );
        }
    }
}
