//! # Application Layer
//!
//! Services that wrap the pure domain with injected capabilities (clock,
//! identifiers, diagnostics), plus the application-level error type.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InfrastructureError};
pub use services::Calculator;
