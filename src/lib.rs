//! # safe-calc
//!
//! Validated arithmetic over IEEE-754 doubles.
//!
//! Every operation validates its operands, computes, then checks that the
//! result is finite and inside the safe-integer interval
//! `[-(2^53 - 1), 2^53 - 1]`. Failures are typed [`CalculationError`]s that
//! carry the operation name and a human-readable reason. NaN, infinities
//! and silently truncated integers never escape.
//!
//! # Layers
//!
//! - [`domain`]: validation, the arithmetic core and the error taxonomy
//! - [`application`]: the [`Calculator`] service with injected clock,
//!   identifier source and diagnostics
//! - [`api`]: the structured error body handed to clients
//! - [`infrastructure`]: settings and log output
//!
//! # Examples
//!
//! ```
//! use safe_calc::{Calculator, ErrorKind, Operation, Operands};
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.add(0.1, 0.2).ok(), Some(0.1 + 0.2));
//!
//! let err = calculator
//!     .calculate(Operation::Divide, Operands::binary(1.0, 0.0))
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//!
//! let record = calculator.factorial_record(5.0).unwrap();
//! assert_eq!(record.result(), 120.0);
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use api::ErrorResponse;
pub use application::{ApplicationError, ApplicationResult, Calculator};
pub use domain::errors::{CalculationError, CalculationResult, ErrorCategory, ErrorKind};
pub use domain::validation::{ValidationPolicy, ValidationVerdict};
pub use domain::value_objects::{CalculationRecord, Operands, Operation, RawValue};
