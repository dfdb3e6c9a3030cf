//! # Validation
//!
//! Predicates that decide whether a value may be used as an operand or
//! returned as a result.
//!
//! Nothing in this module fails by returning an error; every check produces
//! a [`ValidationVerdict`]. Converting a failing verdict into a
//! [`CalculationError`](crate::domain::errors::CalculationError) is the
//! arithmetic core's job.
//!
//! # Check Order
//!
//! ```text
//! presence → numeric type → NaN → finiteness → sign → integrality → range
//! ```
//!
//! The first failing stage wins. Failures are never combined.
//!
//! # Examples
//!
//! ```
//! use safe_calc::domain::validation::{parse, validate_with_policy, ValidationPolicy};
//! use safe_calc::domain::value_objects::RawValue;
//!
//! let verdict = parse(&RawValue::from(" 2.5e1 "), "Amount");
//! assert_eq!(verdict.value(), Some(25.0));
//!
//! let policy = ValidationPolicy::new("Count").with_require_integer(true);
//! let verdict = validate_with_policy(&RawValue::from(2.5), &policy);
//! assert_eq!(verdict.reason(), Some("Count must be an integer"));
//! ```

use crate::domain::value_objects::boundary::{SAFE_MAX, SAFE_MIN};
use crate::domain::value_objects::operation::Operation;
use crate::domain::value_objects::raw_value::{RawValue, parse_decimal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label for the first operand of a binary operation.
pub const FIRST_OPERAND: &str = "First operand";

/// Label for the second operand of a binary operation.
pub const SECOND_OPERAND: &str = "Second operand";

/// Label for the operand of a unary operation.
pub const OPERAND: &str = "Operand";

/// Label used when a policy does not name its parameter.
pub const DEFAULT_LABEL: &str = "Value";

/// Which check rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationIssue {
    /// Value is null or missing.
    Missing,
    /// Value is present but not numeric.
    WrongType,
    /// Text was empty after trimming.
    EmptyText,
    /// Text could not be read as a number.
    Unparseable,
    /// Value is NaN.
    NotANumber,
    /// Value is positive or negative infinity.
    Infinite,
    /// Value is negative where only non-negative values are allowed.
    Negative,
    /// Value has a fractional part where an integer is required.
    NotInteger,
    /// Value is below the policy minimum.
    BelowMinimum,
    /// Value is above the policy maximum.
    AboveMaximum,
    /// Computed result is NaN or infinite.
    NonFiniteResult,
    /// Computed result is above [`SAFE_MAX`].
    Overflow,
    /// Computed result is below [`SAFE_MIN`].
    Underflow,
}

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationFailure {
    issue: ValidationIssue,
    reason: String,
}

impl ValidationFailure {
    /// Creates a failure.
    #[must_use]
    pub fn new(issue: ValidationIssue, reason: impl Into<String>) -> Self {
        Self {
            issue,
            reason: reason.into(),
        }
    }

    /// Returns the failing check.
    #[inline]
    #[must_use]
    pub const fn issue(&self) -> ValidationIssue {
        self.issue
    }

    /// Returns the human-readable reason.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Outcome of a validation check.
///
/// A valid verdict always carries the normalized value. For the composite
/// checks ([`validate`], [`parse`], [`validate_number`]) that value is
/// finite; [`validate_with_policy`] may let infinity through when the policy
/// allows it.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationVerdict {
    /// The value passed.
    Valid(f64),
    /// The value was rejected.
    Invalid(ValidationFailure),
}

impl ValidationVerdict {
    fn invalid(issue: ValidationIssue, reason: impl Into<String>) -> Self {
        Self::Invalid(ValidationFailure::new(issue, reason))
    }

    /// Returns true if the value passed.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the normalized value, if valid.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Valid(value) => Some(*value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the rejection reason, if invalid.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(failure) => Some(failure.reason()),
        }
    }

    /// Runs `next` on the normalized value if this verdict is valid.
    #[must_use]
    pub fn and_then(self, next: impl FnOnce(f64) -> Self) -> Self {
        match self {
            Self::Valid(value) => next(value),
            invalid @ Self::Invalid(_) => invalid,
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationFailure`] of an invalid verdict.
    pub fn into_result(self) -> Result<f64, ValidationFailure> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(failure) => Err(failure),
        }
    }
}

/// Options that narrow what [`validate_with_policy`] accepts.
///
/// Each option is independent. Defaults: infinity rejected, negatives
/// allowed, fractions allowed, bounded by the safe-integer interval.
///
/// # Examples
///
/// ```
/// use safe_calc::domain::validation::ValidationPolicy;
///
/// let policy = ValidationPolicy::new("Quantity")
///     .with_allow_negative(false)
///     .with_require_integer(true)
///     .with_max(1000.0);
/// assert_eq!(policy.label(), "Quantity");
/// assert_eq!(policy.max(), Some(1000.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationPolicy {
    allow_infinity: bool,
    allow_negative: bool,
    require_integer: bool,
    min: Option<f64>,
    max: Option<f64>,
    parameter_label: String,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_infinity: false,
            allow_negative: true,
            require_integer: false,
            min: Some(SAFE_MIN),
            max: Some(SAFE_MAX),
            parameter_label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl ValidationPolicy {
    /// Creates the default policy with a parameter label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::default().with_label(label)
    }

    /// Sets the label used in failure reasons.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.parameter_label = label.into();
        self
    }

    /// Sets whether infinite values pass the finiteness stage.
    #[must_use]
    pub fn with_allow_infinity(mut self, allow: bool) -> Self {
        self.allow_infinity = allow;
        self
    }

    /// Sets whether negative values are accepted.
    #[must_use]
    pub fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Sets whether the value must be integral.
    #[must_use]
    pub fn with_require_integer(mut self, require: bool) -> Self {
        self.require_integer = require;
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Removes both bounds so the range stage is skipped.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.min = None;
        self.max = None;
        self
    }

    /// Returns the parameter label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.parameter_label
    }

    /// Returns whether infinity is allowed.
    #[inline]
    #[must_use]
    pub const fn allow_infinity(&self) -> bool {
        self.allow_infinity
    }

    /// Returns whether negatives are allowed.
    #[inline]
    #[must_use]
    pub const fn allow_negative(&self) -> bool {
        self.allow_negative
    }

    /// Returns whether an integer is required.
    #[inline]
    #[must_use]
    pub const fn require_integer(&self) -> bool {
        self.require_integer
    }

    /// Returns the lower bound.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Returns the upper bound.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }
}

/// Fails if the value is missing.
#[must_use]
pub fn is_present(value: Option<f64>, label: &str) -> ValidationVerdict {
    match value {
        Some(value) => ValidationVerdict::Valid(value),
        None => ValidationVerdict::invalid(
            ValidationIssue::Missing,
            format!("{label} must not be null or undefined"),
        ),
    }
}

/// Fails on NaN.
#[must_use]
pub fn is_not_nan(value: f64, label: &str) -> ValidationVerdict {
    if value.is_nan() {
        return ValidationVerdict::invalid(
            ValidationIssue::NotANumber,
            format!("{label} must be a valid number, not NaN"),
        );
    }
    ValidationVerdict::Valid(value)
}

/// Fails on positive or negative infinity.
#[must_use]
pub fn is_finite(value: f64, label: &str) -> ValidationVerdict {
    if value.is_infinite() {
        let sign = if value.is_sign_positive() { "+" } else { "-" };
        return ValidationVerdict::invalid(
            ValidationIssue::Infinite,
            format!("{label} must be a finite number, received {sign}Infinity"),
        );
    }
    ValidationVerdict::Valid(value)
}

/// Fails when the value has a non-zero fractional part.
#[must_use]
pub fn is_integer(value: f64, label: &str) -> ValidationVerdict {
    if value.fract() != 0.0 {
        return ValidationVerdict::invalid(
            ValidationIssue::NotInteger,
            format!("{label} must be an integer"),
        );
    }
    ValidationVerdict::Valid(value)
}

/// Fails when the value lies outside `[min, max]`.
#[must_use]
pub fn is_in_range(value: f64, min: f64, max: f64, label: &str) -> ValidationVerdict {
    let issue = if value < min {
        ValidationIssue::BelowMinimum
    } else if value > max {
        ValidationIssue::AboveMaximum
    } else {
        return ValidationVerdict::Valid(value);
    };
    ValidationVerdict::invalid(issue, format!("{label} must be between {min} and {max}"))
}

/// The default operand contract for an already-numeric value: not NaN,
/// finite.
#[must_use]
pub fn validate_number(value: f64, label: &str) -> ValidationVerdict {
    is_present(Some(value), label)
        .and_then(|v| is_not_nan(v, label))
        .and_then(|v| is_finite(v, label))
}

/// The default operand contract: present, numeric, not NaN, finite.
///
/// Text is rejected here; use [`parse`] to accept it.
#[must_use]
pub fn validate(value: &RawValue, label: &str) -> ValidationVerdict {
    match value {
        RawValue::Absent => is_present(None, label),
        RawValue::Number(number) => validate_number(*number, label),
        other => wrong_type(other, label),
    }
}

/// Applies [`validate`] and then the narrowing options of `policy`.
#[must_use]
pub fn validate_with_policy(value: &RawValue, policy: &ValidationPolicy) -> ValidationVerdict {
    let label = policy.label();
    let number = match value {
        RawValue::Absent => return is_present(None, label),
        RawValue::Number(number) => *number,
        other => return wrong_type(other, label),
    };

    let mut verdict = is_not_nan(number, label);
    if !policy.allow_infinity() {
        verdict = verdict.and_then(|v| is_finite(v, label));
    }
    if !policy.allow_negative() {
        verdict = verdict.and_then(|v| is_non_negative(v, label));
    }
    if policy.require_integer() {
        verdict = verdict.and_then(|v| is_integer(v, label));
    }
    if policy.min().is_some() || policy.max().is_some() {
        let min = policy.min().unwrap_or(f64::NEG_INFINITY);
        let max = policy.max().unwrap_or(f64::INFINITY);
        verdict = verdict.and_then(|v| is_in_range(v, min, max, label));
    }
    verdict
}

/// Validates the two operands of a binary operation.
///
/// The first operand is checked first, so a failure always names the
/// leftmost bad argument.
///
/// # Errors
///
/// Returns the first [`ValidationFailure`], labelled
/// [`FIRST_OPERAND`] or [`SECOND_OPERAND`].
pub fn validate_operands(a: f64, b: f64) -> Result<(f64, f64), ValidationFailure> {
    let a = validate_number(a, FIRST_OPERAND).into_result()?;
    let b = validate_number(b, SECOND_OPERAND).into_result()?;
    Ok((a, b))
}

/// Converts a raw value into a validated number.
///
/// Text is trimmed, rejected if empty, and parsed with scientific-notation
/// support. Other non-numeric values are coerced; a failed coercion shows up
/// as an ordinary NaN failure.
#[must_use]
pub fn parse(value: &RawValue, label: &str) -> ValidationVerdict {
    match value {
        RawValue::Absent => is_present(None, label),
        RawValue::Number(number) => validate_number(*number, label),
        RawValue::Text(text) => match parse_text(text, label) {
            Ok(number) => validate_number(number, label),
            Err(verdict) => verdict,
        },
        other => validate_number(other.coerce(), label),
    }
}

/// Like [`validate_with_policy`], but reads text the way [`parse`] does.
///
/// Empty and unreadable text are rejected before any policy stage runs;
/// other values go straight to [`validate_with_policy`].
///
/// # Examples
///
/// ```
/// use safe_calc::domain::validation::{parse_with_policy, ValidationPolicy};
/// use safe_calc::domain::value_objects::RawValue;
///
/// let policy = ValidationPolicy::new("Quantity").with_allow_negative(false);
/// let verdict = parse_with_policy(&RawValue::from(" 12 "), &policy);
/// assert_eq!(verdict.value(), Some(12.0));
///
/// let verdict = parse_with_policy(&RawValue::from(""), &policy);
/// assert_eq!(verdict.reason(), Some("Quantity must not be an empty string"));
/// ```
#[must_use]
pub fn parse_with_policy(value: &RawValue, policy: &ValidationPolicy) -> ValidationVerdict {
    match value {
        RawValue::Text(text) => match parse_text(text, policy.label()) {
            Ok(number) => validate_with_policy(&RawValue::Number(number), policy),
            Err(verdict) => verdict,
        },
        other => validate_with_policy(other, policy),
    }
}

fn parse_text(text: &str, label: &str) -> Result<f64, ValidationVerdict> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationVerdict::invalid(
            ValidationIssue::EmptyText,
            format!("{label} must not be an empty string"),
        ));
    }
    parse_decimal(trimmed).ok_or_else(|| {
        ValidationVerdict::invalid(
            ValidationIssue::Unparseable,
            format!("{label} must be a valid number, received \"{trimmed}\""),
        )
    })
}

/// Checks a computed result: it must be finite and inside the safe-integer
/// interval.
#[must_use]
pub fn validate_result_range(result: f64, operation: Operation) -> ValidationVerdict {
    let name = operation.description();
    if result.is_nan() {
        return ValidationVerdict::invalid(
            ValidationIssue::NonFiniteResult,
            format!("Result of {name} is not a number"),
        );
    }
    if result.is_infinite() {
        let sign = if result.is_sign_positive() { "+" } else { "-" };
        return ValidationVerdict::invalid(
            ValidationIssue::NonFiniteResult,
            format!("Result of {name} is {sign}Infinity"),
        );
    }
    if result > SAFE_MAX {
        return ValidationVerdict::invalid(
            ValidationIssue::Overflow,
            format!("Result of {name} exceeds maximum safe integer ({SAFE_MAX})"),
        );
    }
    if result < SAFE_MIN {
        return ValidationVerdict::invalid(
            ValidationIssue::Underflow,
            format!("Result of {name} is below minimum safe integer ({SAFE_MIN})"),
        );
    }
    ValidationVerdict::Valid(result)
}

fn is_non_negative(value: f64, label: &str) -> ValidationVerdict {
    if value < 0.0 {
        return ValidationVerdict::invalid(
            ValidationIssue::Negative,
            format!("{label} must not be negative"),
        );
    }
    ValidationVerdict::Valid(value)
}

fn wrong_type(value: &RawValue, label: &str) -> ValidationVerdict {
    ValidationVerdict::invalid(
        ValidationIssue::WrongType,
        format!("{label} must be a number, received {}", value.type_name()),
    )
}
