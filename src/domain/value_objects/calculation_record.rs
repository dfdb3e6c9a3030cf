//! # Calculation Record
//!
//! A successful result decorated with audit metadata.

use crate::domain::value_objects::ids::CalculationId;
use crate::domain::value_objects::operation::Operation;
use crate::domain::value_objects::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Result of a decorated calculation.
///
/// Created at the moment of a successful computation and handed straight to
/// the caller. The engine keeps no history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    result: f64,
    operation: Operation,
    timestamp: Timestamp,
    calculation_id: CalculationId,
}

impl CalculationRecord {
    /// Creates a record.
    #[must_use]
    pub const fn new(
        result: f64,
        operation: Operation,
        timestamp: Timestamp,
        calculation_id: CalculationId,
    ) -> Self {
        Self {
            result,
            operation,
            timestamp,
            calculation_id,
        }
    }

    /// Returns the numeric result.
    #[inline]
    #[must_use]
    pub const fn result(&self) -> f64 {
        self.result
    }

    /// Returns the operation that produced the result.
    #[inline]
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns when the result was computed.
    #[inline]
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the record identifier.
    #[inline]
    #[must_use]
    pub const fn calculation_id(&self) -> CalculationId {
        self.calculation_id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = CalculationRecord::new(
            5.0,
            Operation::Add,
            Timestamp::from_millis(1_704_067_200_000).unwrap(),
            CalculationId::from_uuid(Uuid::nil()),
        );
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["result"], 5.0);
        assert_eq!(value["operation"], "add");
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00.000Z");
        assert_eq!(
            value["calculationId"],
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
