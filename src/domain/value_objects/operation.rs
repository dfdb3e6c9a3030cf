//! # Operations
//!
//! The closed catalogue of arithmetic operations and their operands.
//!
//! # Examples
//!
//! ```
//! use safe_calc::domain::value_objects::operation::{Arity, Operands, Operation};
//!
//! let op: Operation = "mod".parse().unwrap();
//! assert_eq!(op, Operation::Modulo);
//! assert_eq!(op.arity(), Arity::Binary);
//! assert_eq!(op.apply(Operands::binary(-7.0, 3.0)).unwrap(), -1.0);
//! ```

use crate::domain::errors::{CalculationError, CalculationResult};
use crate::domain::services::arithmetic;
use crate::domain::validation::{self, FIRST_OPERAND, OPERAND, SECOND_OPERAND};
use crate::domain::value_objects::raw_value::RawValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of operands an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// One operand.
    Unary,
    /// Two operands.
    Binary,
}

impl Arity {
    /// Returns the operand count.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Unary => "unary",
            Self::Binary => "binary",
        })
    }
}

/// An arithmetic operation supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`.
    Add,
    /// `a - b`.
    Subtract,
    /// `a * b`.
    Multiply,
    /// `a / b`.
    Divide,
    /// `a ^ b`.
    Power,
    /// Truncating remainder, sign follows the dividend.
    Modulo,
    /// Square root.
    Sqrt,
    /// `n!` for integral `n` in `[0, 170]`.
    Factorial,
    /// Absolute value.
    Absolute,
    /// Smallest integer not less than the operand.
    Ceiling,
    /// Largest integer not greater than the operand.
    Floor,
    /// Nearest integer, halves round towards positive infinity.
    Round,
}

impl Operation {
    /// Every operation, binary ones first.
    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Modulo,
        Self::Sqrt,
        Self::Factorial,
        Self::Absolute,
        Self::Ceiling,
        Self::Floor,
        Self::Round,
    ];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Modulo => "modulo",
            Self::Sqrt => "sqrt",
            Self::Factorial => "factorial",
            Self::Absolute => "absolute",
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Round => "round",
        }
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Power => "power",
            Self::Modulo => "modulo",
            Self::Sqrt => "square root",
            Self::Factorial => "factorial",
            Self::Absolute => "absolute value",
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Round => "round",
        }
    }

    /// Returns how many operands this operation takes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Power
            | Self::Modulo => Arity::Binary,
            Self::Sqrt
            | Self::Factorial
            | Self::Absolute
            | Self::Ceiling
            | Self::Floor
            | Self::Round => Arity::Unary,
        }
    }

    /// Runs this operation on the given operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidOperand`] if the operand count does
    /// not match [`arity`](Self::arity), otherwise whatever the operation
    /// itself reports.
    pub fn apply(self, operands: Operands) -> CalculationResult<f64> {
        use Operands::{Binary, Unary};

        match (self, operands) {
            (Self::Add, Binary(a, b)) => arithmetic::add(a, b),
            (Self::Subtract, Binary(a, b)) => arithmetic::subtract(a, b),
            (Self::Multiply, Binary(a, b)) => arithmetic::multiply(a, b),
            (Self::Divide, Binary(a, b)) => arithmetic::divide(a, b),
            (Self::Power, Binary(a, b)) => arithmetic::power(a, b),
            (Self::Modulo, Binary(a, b)) => arithmetic::modulo(a, b),
            (Self::Sqrt, Unary(x)) => arithmetic::sqrt(x),
            (Self::Factorial, Unary(x)) => arithmetic::factorial(x),
            (Self::Absolute, Unary(x)) => arithmetic::absolute(x),
            (Self::Ceiling, Unary(x)) => arithmetic::ceiling(x),
            (Self::Floor, Unary(x)) => arithmetic::floor(x),
            (Self::Round, Unary(x)) => arithmetic::round(x),
            (op, operands) => Err(arity_mismatch(op, op.arity(), operands.count())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when an operation name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" => Self::Add,
            "subtract" | "sub" => Self::Subtract,
            "multiply" | "mul" => Self::Multiply,
            "divide" | "div" => Self::Divide,
            "power" | "pow" => Self::Power,
            "modulo" | "mod" => Self::Modulo,
            "sqrt" => Self::Sqrt,
            "factorial" => Self::Factorial,
            "absolute" | "abs" => Self::Absolute,
            "ceiling" | "ceil" => Self::Ceiling,
            "floor" => Self::Floor,
            "round" => Self::Round,
            _ => return Err(UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}

/// Numeric operands for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operands {
    /// A single operand.
    Unary(f64),
    /// First and second operand.
    Binary(f64, f64),
}

impl Operands {
    /// Creates unary operands.
    #[inline]
    #[must_use]
    pub const fn unary(value: f64) -> Self {
        Self::Unary(value)
    }

    /// Creates binary operands.
    #[inline]
    #[must_use]
    pub const fn binary(a: f64, b: f64) -> Self {
        Self::Binary(a, b)
    }

    /// Returns the number of operands.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(..) => 2,
        }
    }

    /// Converts untyped inputs into operands for `operation`.
    ///
    /// Each value goes through [`validation::parse`] with the label the
    /// engine uses for its position.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidOperand`] if the number of values
    /// does not match the operation's arity or a value fails to parse.
    pub fn parse(operation: Operation, values: &[RawValue]) -> CalculationResult<Self> {
        let parse = |value: &RawValue, label: &str| {
            validation::parse(value, label)
                .into_result()
                .map_err(|failure| CalculationError::invalid_operand(operation, failure.reason()))
        };

        match (operation.arity(), values) {
            (Arity::Unary, [x]) => Ok(Self::Unary(parse(x, OPERAND)?)),
            (Arity::Binary, [a, b]) => Ok(Self::Binary(
                parse(a, FIRST_OPERAND)?,
                parse(b, SECOND_OPERAND)?,
            )),
            (arity, _) => Err(arity_mismatch(operation, arity, values.len())),
        }
    }
}

fn arity_mismatch(operation: Operation, arity: Arity, got: usize) -> CalculationError {
    CalculationError::invalid_operand(
        operation,
        format!(
            "{} expects {} operand(s), got {got}",
            operation.description(),
            arity.count()
        ),
    )
}
