//! # Value Objects
//!
//! Immutable types passed by value through the engine.
//!
//! ## Inputs
//!
//! - [`RawValue`]: untyped input before validation
//! - [`Operation`], [`Operands`]: what to compute, and on what
//!
//! ## Outputs
//!
//! - [`CalculationRecord`]: decorated result
//! - [`CalculationId`], [`Timestamp`]: record metadata
//!
//! ## Boundary Policy
//!
//! - [`boundary`]: the safe-integer interval and factorial limit

pub mod boundary;
pub mod calculation_record;
pub mod ids;
pub mod operation;
pub mod raw_value;
pub mod timestamp;

pub use boundary::{FACTORIAL_MAX_INPUT, SAFE_MAX, SAFE_MIN};
pub use calculation_record::CalculationRecord;
pub use ids::CalculationId;
pub use operation::{Arity, Operands, Operation, UnknownOperation};
pub use raw_value::RawValue;
pub use timestamp::Timestamp;
