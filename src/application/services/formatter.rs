//! # Result Formatter
//!
//! Decorates a raw result with a timestamp and a fresh identifier.
//!
//! The clock and the identifier source are injected so tests can pin them.
//!
//! # Examples
//!
//! ```
//! use safe_calc::application::services::formatter::ResultFormatter;
//! use safe_calc::domain::value_objects::Operation;
//!
//! let formatter = ResultFormatter::system();
//! let a = formatter.format(4.0, Operation::Sqrt);
//! let b = formatter.format(4.0, Operation::Sqrt);
//! assert_eq!(a.result(), b.result());
//! assert_ne!(a.calculation_id(), b.calculation_id());
//! ```

use crate::domain::value_objects::calculation_record::CalculationRecord;
use crate::domain::value_objects::ids::CalculationId;
use crate::domain::value_objects::operation::Operation;
use crate::domain::value_objects::timestamp::Timestamp;
use std::fmt;
use std::sync::Arc;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// Source of calculation identifiers.
///
/// Successive calls must return distinct identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> CalculationId;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Random (UUID v4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> CalculationId {
        CalculationId::new_v4()
    }
}

/// Builds [`CalculationRecord`]s. Never fails.
#[derive(Clone)]
pub struct ResultFormatter {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl ResultFormatter {
    /// Creates a formatter from explicit capabilities.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Creates a formatter backed by the system clock and random identifiers.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator))
    }

    /// Wraps `result` with metadata.
    #[must_use]
    pub fn format(&self, result: f64, operation: Operation) -> CalculationRecord {
        CalculationRecord::new(result, operation, self.clock.now(), self.ids.next_id())
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for ResultFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultFormatter").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Always returns the same instant.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FixedClock(pub(crate) Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    /// Hands out `00000000-0000-0000-0000-000000000001`, `...02`, ...
    #[derive(Debug, Default)]
    pub(crate) struct SequentialIds(AtomicU64);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> CalculationId {
            let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
            CalculationId::from_uuid(Uuid::from_u128(u128::from(n)))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::testing::{FixedClock, SequentialIds};
    use super::*;

    fn fixed_formatter() -> ResultFormatter {
        let clock = FixedClock(Timestamp::from_millis(1_704_067_200_000).unwrap());
        ResultFormatter::new(Arc::new(clock), Arc::new(SequentialIds::default()))
    }

    #[test]
    fn uses_injected_clock_and_ids() {
        let formatter = fixed_formatter();
        let record = formatter.format(42.0, Operation::Multiply);
        assert_eq!(record.result(), 42.0);
        assert_eq!(record.operation(), Operation::Multiply);
        assert_eq!(record.timestamp().to_iso8601(), "2024-01-01T00:00:00.000Z");
        assert_eq!(
            record.calculation_id().to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn every_record_gets_a_new_id() {
        let formatter = fixed_formatter();
        let first = formatter.format(1.0, Operation::Add);
        let second = formatter.format(1.0, Operation::Add);
        assert_ne!(first.calculation_id(), second.calculation_id());
        assert_eq!(first.timestamp(), second.timestamp());
    }

    #[test]
    fn system_formatter_is_default() {
        let record = ResultFormatter::default().format(0.0, Operation::Round);
        assert_eq!(record.operation(), Operation::Round);
    }
}
