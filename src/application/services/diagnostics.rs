//! # Diagnostics
//!
//! Side channel for observing calculations.
//!
//! The engine never owns a logger. Callers inject a [`DiagnosticSink`]; the
//! default [`NoopSink`] discards everything. Correctness never depends on
//! the sink.

use crate::domain::errors::CalculationError;
use crate::domain::value_objects::operation::Operation;

/// Receives a notification for every finished calculation.
///
/// Implementations must be cheap and must not fail.
pub trait DiagnosticSink: Send + Sync {
    /// Called after a successful calculation.
    fn calculation_succeeded(&self, operation: Operation, result: f64);

    /// Called after a failed calculation.
    fn calculation_failed(&self, operation: Operation, error: &CalculationError);
}

/// A sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn calculation_succeeded(&self, _operation: Operation, _result: f64) {}

    #[inline]
    fn calculation_failed(&self, _operation: Operation, _error: &CalculationError) {}
}
