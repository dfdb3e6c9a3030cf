//! # Commands
//!
//! Text-in entry points used by front ends such as the CLI.
//!
//! Operation names and operand text arrive unparsed. Failures come back as
//! [`ApplicationError`] so callers can tell client mistakes (unknown
//! operation, bad operand, rejected value) from infrastructure faults.
//!
//! # Examples
//!
//! ```
//! use safe_calc::application::services::commands::{self, Evaluation};
//! use safe_calc::application::services::Calculator;
//! use safe_calc::domain::validation::ValidationPolicy;
//! use safe_calc::domain::value_objects::RawValue;
//!
//! let calculator = Calculator::new();
//! let operands = [RawValue::from("7"), RawValue::from("-3")];
//! let outcome = commands::evaluate(&calculator, "mod", &operands, false).unwrap();
//! assert_eq!(outcome, Evaluation::Raw(1.0));
//!
//! let policy = ValidationPolicy::new("Quantity").with_allow_negative(false);
//! assert!(commands::check(&RawValue::from("-2"), &policy).is_err());
//! ```

use crate::application::error::{ApplicationError, ApplicationResult, InfrastructureError};
use crate::application::services::calculator::Calculator;
use crate::domain::validation::{self, ValidationPolicy};
use crate::domain::value_objects::calculation_record::CalculationRecord;
use crate::domain::value_objects::operation::Operation;
use crate::domain::value_objects::raw_value::RawValue;

/// Successful outcome of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// Bare result.
    Raw(f64),
    /// Result with timestamp and calculation id.
    Record(CalculationRecord),
}

impl Evaluation {
    /// Returns the numeric result.
    #[must_use]
    pub const fn result(&self) -> f64 {
        match self {
            Self::Raw(result) => *result,
            Self::Record(record) => record.result(),
        }
    }

    /// Renders the outcome for output: the number itself, or the record as
    /// JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Serialization`] if the record cannot
    /// be encoded.
    pub fn render(&self, pretty: bool) -> Result<String, InfrastructureError> {
        let rendered = match self {
            Self::Raw(result) => result.to_string(),
            Self::Record(record) if pretty => serde_json::to_string_pretty(record)?,
            Self::Record(record) => serde_json::to_string(record)?,
        };
        Ok(rendered)
    }
}

/// Resolves `operation` by name or alias and runs it on untyped operands.
///
/// # Errors
///
/// - [`ApplicationError::UnknownOperation`] if the name is not recognised
/// - [`ApplicationError::Calculation`] if an operand is rejected or the
///   operation fails
pub fn evaluate(
    calculator: &Calculator,
    operation: &str,
    operands: &[RawValue],
    decorated: bool,
) -> ApplicationResult<Evaluation> {
    let operation: Operation = operation.parse()?;
    tracing::debug!(%operation, count = operands.len(), decorated, "evaluating");

    let evaluation = if decorated {
        Evaluation::Record(calculator.calculate_record_raw_input(operation, operands)?)
    } else {
        Evaluation::Raw(calculator.calculate_raw_input(operation, operands)?)
    };
    Ok(evaluation)
}

/// Parses `value` and runs it through `policy`.
///
/// Text is trimmed and must hold a number; empty or unreadable text is
/// rejected before any policy stage.
///
/// # Errors
///
/// Returns [`ApplicationError::Validation`] with the first failing stage.
pub fn check(value: &RawValue, policy: &ValidationPolicy) -> ApplicationResult<f64> {
    validation::parse_with_policy(value, policy)
        .into_result()
        .map_err(ApplicationError::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;
    use crate::domain::validation::ValidationIssue;

    fn validation_issue(err: &ApplicationError) -> Option<ValidationIssue> {
        match err {
            ApplicationError::Validation(failure) => Some(failure.issue()),
            _ => None,
        }
    }

    mod evaluate {
        use super::*;

        #[test]
        fn resolves_aliases() {
            let calculator = Calculator::new();
            let operands = [RawValue::from("2"), RawValue::from("10")];
            let outcome = evaluate(&calculator, "pow", &operands, false).unwrap();
            assert_eq!(outcome, Evaluation::Raw(1024.0));
            assert_eq!(outcome.render(false).unwrap(), "1024");
        }

        #[test]
        fn decorated_outcome_renders_a_record() {
            let calculator = Calculator::new();
            let outcome =
                evaluate(&calculator, "factorial", &[RawValue::from("5")], true).unwrap();
            assert_eq!(outcome.result(), 120.0);

            let json: serde_json::Value =
                serde_json::from_str(&outcome.render(false).unwrap()).unwrap();
            assert_eq!(json["operation"], "factorial");
            assert_eq!(json["result"], 120.0);
            assert!(json["calculationId"].is_string());
        }

        #[test]
        fn unknown_operation_is_a_client_error() {
            let err = evaluate(&Calculator::new(), "log", &[RawValue::from("1")], false)
                .unwrap_err();
            assert!(matches!(err, ApplicationError::UnknownOperation(_)));
            assert!(err.is_client_error());
        }

        #[test]
        fn empty_operand_surfaces_the_calculation_error() {
            let operands = [RawValue::from(""), RawValue::from("1")];
            let err = evaluate(&Calculator::new(), "add", &operands, false).unwrap_err();
            let calculation = err.as_calculation().unwrap();
            assert_eq!(calculation.kind(), ErrorKind::InvalidOperand);
            assert_eq!(calculation.reason(), "First operand must not be an empty string");
        }
    }

    mod check {
        use super::*;

        #[test]
        fn empty_text_is_rejected() {
            let policy = ValidationPolicy::default();
            for text in ["", "   "] {
                let err = check(&RawValue::from(text), &policy).unwrap_err();
                assert_eq!(validation_issue(&err), Some(ValidationIssue::EmptyText));
            }
        }

        #[test]
        fn unreadable_text_is_rejected() {
            let policy = ValidationPolicy::default();
            for text in ["abc", "12abc"] {
                let err = check(&RawValue::from(text), &policy).unwrap_err();
                assert_eq!(validation_issue(&err), Some(ValidationIssue::Unparseable));
                assert!(err.is_client_error());
            }
        }

        #[test]
        fn parsed_value_goes_through_the_policy() {
            let policy = ValidationPolicy::new("Quantity")
                .with_allow_negative(false)
                .with_require_integer(true);
            assert_eq!(check(&RawValue::from(" 12 "), &policy).unwrap(), 12.0);

            let err = check(&RawValue::from("-3.5"), &policy).unwrap_err();
            assert_eq!(
                err.to_string(),
                "validation error: Quantity must not be negative"
            );
        }
    }
}
