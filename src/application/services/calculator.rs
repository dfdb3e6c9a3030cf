//! # Calculator
//!
//! Entry point that ties the arithmetic core, the result formatter and the
//! diagnostic sink together.
//!
//! Every operation is available in two shapes:
//!
//! - raw: returns the bare `f64`
//! - record: returns a [`CalculationRecord`] with timestamp and identifier
//!
//! Both shapes run the same computation, so they succeed and fail together
//! and agree on the numeric result.
//!
//! # Examples
//!
//! ```
//! use safe_calc::application::services::Calculator;
//! use safe_calc::domain::value_objects::{Operands, Operation, RawValue};
//!
//! let calculator = Calculator::new();
//!
//! assert_eq!(calculator.divide(10.0, 4.0).unwrap(), 2.5);
//!
//! let record = calculator
//!     .calculate_record(Operation::Power, Operands::binary(2.0, 8.0))
//!     .unwrap();
//! assert_eq!(record.result(), 256.0);
//!
//! let raw = [RawValue::from("9")];
//! assert_eq!(calculator.calculate_raw_input(Operation::Sqrt, &raw).unwrap(), 3.0);
//! ```

use crate::application::services::diagnostics::{DiagnosticSink, NoopSink};
use crate::application::services::formatter::ResultFormatter;
use crate::domain::errors::CalculationResult;
use crate::domain::value_objects::calculation_record::CalculationRecord;
use crate::domain::value_objects::operation::{Operands, Operation};
use crate::domain::value_objects::raw_value::RawValue;
use std::fmt;
use std::sync::Arc;

/// Stateless calculation service.
///
/// Cloning is cheap; clones share the injected formatter capabilities and
/// sink.
#[derive(Clone)]
pub struct Calculator {
    formatter: ResultFormatter,
    sink: Arc<dyn DiagnosticSink>,
}

impl Calculator {
    /// Creates a calculator with the system formatter and no diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            formatter: ResultFormatter::system(),
            sink: Arc::new(NoopSink),
        }
    }

    /// Replaces the result formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: ResultFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Computes `operation` and returns the bare result.
    ///
    /// # Errors
    ///
    /// Returns the [`CalculationError`](crate::domain::errors::CalculationError)
    /// reported by the operation.
    pub fn calculate(&self, operation: Operation, operands: Operands) -> CalculationResult<f64> {
        let outcome = operation.apply(operands);
        self.report(operation, &outcome);
        outcome
    }

    /// Computes `operation` and decorates the result.
    ///
    /// # Errors
    ///
    /// Same as [`calculate`](Self::calculate).
    pub fn calculate_record(
        &self,
        operation: Operation,
        operands: Operands,
    ) -> CalculationResult<CalculationRecord> {
        self.calculate(operation, operands)
            .map(|result| self.formatter.format(result, operation))
    }

    /// Parses untyped inputs and computes `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperand`] if the inputs do not parse, otherwise the
    /// same as [`calculate`](Self::calculate).
    ///
    /// [`InvalidOperand`]: crate::domain::errors::CalculationError::InvalidOperand
    pub fn calculate_raw_input(
        &self,
        operation: Operation,
        values: &[RawValue],
    ) -> CalculationResult<f64> {
        match Operands::parse(operation, values) {
            Ok(operands) => self.calculate(operation, operands),
            Err(err) => {
                self.sink.calculation_failed(operation, &err);
                Err(err)
            }
        }
    }

    /// Parses untyped inputs, computes `operation` and decorates the result.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_raw_input`](Self::calculate_raw_input).
    pub fn calculate_record_raw_input(
        &self,
        operation: Operation,
        values: &[RawValue],
    ) -> CalculationResult<CalculationRecord> {
        self.calculate_raw_input(operation, values)
            .map(|result| self.formatter.format(result, operation))
    }

    fn report(&self, operation: Operation, outcome: &CalculationResult<f64>) {
        match outcome {
            Ok(result) => self.sink.calculation_succeeded(operation, *result),
            Err(err) => self.sink.calculation_failed(operation, err),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

macro_rules! binary_shortcuts {
    ($($raw:ident, $record:ident => $op:ident;)*) => {
        impl Calculator {
            $(
                #[doc = concat!("Raw `", stringify!($raw), "` of two operands.")]
                ///
                /// # Errors
                ///
                /// See [`calculate`](Self::calculate).
                pub fn $raw(&self, a: f64, b: f64) -> CalculationResult<f64> {
                    self.calculate(Operation::$op, Operands::binary(a, b))
                }

                #[doc = concat!("Decorated `", stringify!($raw), "` of two operands.")]
                ///
                /// # Errors
                ///
                /// See [`calculate`](Self::calculate).
                pub fn $record(&self, a: f64, b: f64) -> CalculationResult<CalculationRecord> {
                    self.calculate_record(Operation::$op, Operands::binary(a, b))
                }
            )*
        }
    };
}

macro_rules! unary_shortcuts {
    ($($raw:ident, $record:ident => $op:ident;)*) => {
        impl Calculator {
            $(
                #[doc = concat!("Raw `", stringify!($raw), "` of one operand.")]
                ///
                /// # Errors
                ///
                /// See [`calculate`](Self::calculate).
                pub fn $raw(&self, x: f64) -> CalculationResult<f64> {
                    self.calculate(Operation::$op, Operands::unary(x))
                }

                #[doc = concat!("Decorated `", stringify!($raw), "` of one operand.")]
                ///
                /// # Errors
                ///
                /// See [`calculate`](Self::calculate).
                pub fn $record(&self, x: f64) -> CalculationResult<CalculationRecord> {
                    self.calculate_record(Operation::$op, Operands::unary(x))
                }
            )*
        }
    };
}

binary_shortcuts! {
    add, add_record => Add;
    subtract, subtract_record => Subtract;
    multiply, multiply_record => Multiply;
    divide, divide_record => Divide;
    power, power_record => Power;
    modulo, modulo_record => Modulo;
}

unary_shortcuts! {
    sqrt, sqrt_record => Sqrt;
    factorial, factorial_record => Factorial;
    absolute, absolute_record => Absolute;
    ceiling, ceiling_record => Ceiling;
    floor, floor_record => Floor;
    round, round_record => Round;
}
