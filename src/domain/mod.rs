//! # Domain Layer
//!
//! Pure validation and arithmetic. Nothing here performs I/O, reads the
//! clock or logs.

pub mod errors;
pub mod services;
pub mod validation;
pub mod value_objects;

pub use errors::{CalculationError, CalculationResult, ErrorCategory, ErrorKind};
