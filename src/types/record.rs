//! Salary record type with validation and lenient deserialization.
//!
//! Records are validated on write (every monetary field finite and
//! non-negative, designation non-empty) but read leniently: a corrupted
//! monetary value in the persisted state deserializes to NaN instead of
//! failing the whole load, and is counted as zero wherever amounts are
//! summed or displayed.

use serde::{Deserialize, Deserializer, Serialize};

/// One salary line item for a client/designation pair.
///
/// Identity is positional: a record is addressed by its index in the
/// ledger sequence, and indices shift down when an earlier record is
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Client the position is billed to. May be empty ("N/A" on export);
    /// a record persisted without the key loads as empty.
    #[serde(default)]
    pub client: String,
    /// Designation of the staff member. Never empty in a valid record.
    pub designation: String,
    /// Basic pay component.
    #[serde(deserialize_with = "lenient_amount")]
    pub basic: f64,
    /// House rent allowance.
    #[serde(deserialize_with = "lenient_amount")]
    pub hra: f64,
    /// Dearness allowance.
    #[serde(deserialize_with = "lenient_amount")]
    pub da: f64,
    /// Any other allowance.
    #[serde(deserialize_with = "lenient_amount")]
    pub other_allowance: f64,
}

impl SalaryRecord {
    /// Create a new record. Does not validate; call [`SalaryRecord::validate`]
    /// before inserting into a ledger.
    pub fn new(
        client: impl Into<String>,
        designation: impl Into<String>,
        basic: f64,
        hra: f64,
        da: f64,
        other_allowance: f64,
    ) -> Self {
        Self {
            client: client.into(),
            designation: designation.into(),
            basic,
            hra,
            da,
            other_allowance,
        }
    }

    /// Check the write-side invariants: designation non-empty, all four
    /// monetary fields finite and non-negative.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.designation.trim().is_empty() {
            return Err(RecordError::MissingDesignation);
        }

        for (name, value) in [
            ("basic", self.basic),
            ("hra", self.hra),
            ("da", self.da),
            ("other allowance", self.other_allowance),
        ] {
            if !value.is_finite() {
                return Err(RecordError::NotANumber(name));
            }
            if value < 0.0 {
                return Err(RecordError::Negative(name, value));
            }
        }

        Ok(())
    }

    /// Sum of the four monetary components, non-finite values counted as zero.
    pub fn total(&self) -> f64 {
        amount_or_zero(self.basic)
            + amount_or_zero(self.hra)
            + amount_or_zero(self.da)
            + amount_or_zero(self.other_allowance)
    }

    /// Client name for display/export, defaulting to "N/A" when absent.
    pub fn client_or_na(&self) -> &str {
        if self.client.is_empty() {
            "N/A"
        } else {
            &self.client
        }
    }

    /// Case-insensitive substring match against client and designation.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.client.to_lowercase().contains(&needle)
            || self.designation.to_lowercase().contains(&needle)
    }
}

/// Error type for record validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    #[error("designation must not be empty")]
    MissingDesignation,
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must not be negative (got {1})")]
    Negative(&'static str, f64),
}

/// Column-wise sums of the monetary fields across a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub basic: f64,
    pub hra: f64,
    pub da: f64,
    pub other: f64,
}

impl Totals {
    /// Grand total across all four columns.
    pub fn grand(&self) -> f64 {
        self.basic + self.hra + self.da + self.other
    }
}

/// Treat corrupted (non-finite) stored amounts as zero.
pub(crate) fn amount_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Deserialize a monetary field, coercing anything non-numeric to NaN.
///
/// Persisted state may have been edited outside the application; a single
/// bad field must not make the whole ledger unloadable.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value.as_f64() {
        Some(n) => Ok(n),
        None => {
            tracing::warn!(?value, "non-numeric amount in stored record, treating as zero");
            Ok(f64::NAN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SalaryRecord {
        SalaryRecord::new("SAMASHTI", "Supervisor_1_Active", 10.0, 20.0, 30.0, 40.0)
    }

    #[test]
    fn test_valid_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut r = record();
        r.hra = -1.0;
        assert!(matches!(r.validate(), Err(RecordError::Negative("hra", _))));
    }

    #[test]
    fn test_nan_amount_rejected() {
        let mut r = record();
        r.da = f64::NAN;
        assert!(matches!(r.validate(), Err(RecordError::NotANumber("da"))));
    }

    #[test]
    fn test_empty_designation_rejected() {
        let mut r = record();
        r.designation = "  ".to_string();
        assert!(matches!(
            r.validate(),
            Err(RecordError::MissingDesignation)
        ));
    }

    #[test]
    fn test_total() {
        assert_eq!(record().total(), 100.0);
    }

    #[test]
    fn test_total_with_corrupted_field() {
        let mut r = record();
        r.basic = f64::NAN;
        assert_eq!(r.total(), 90.0);
    }

    #[test]
    fn test_client_or_na() {
        let mut r = record();
        assert_eq!(r.client_or_na(), "SAMASHTI");
        r.client = String::new();
        assert_eq!(r.client_or_na(), "N/A");
    }

    #[test]
    fn test_case_insensitive_match() {
        let r = record();
        assert!(r.matches("supervisor"));
        assert!(r.matches("samashti"));
        assert!(!r.matches("janitor"));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("otherAllowance").is_some());
    }

    #[test]
    fn test_lenient_deserialization() {
        // No client key, non-numeric basic, null other allowance: the
        // record still loads, rendering "N/A" and counting zeros.
        let json = r#"{
            "designation": "Janitor_1_Active",
            "basic": "oops",
            "hra": 8,
            "da": 9,
            "otherAllowance": null
        }"#;
        let r: SalaryRecord = serde_json::from_str(json).unwrap();
        assert!(r.client.is_empty());
        assert_eq!(r.client_or_na(), "N/A");
        assert!(r.basic.is_nan());
        assert!(r.other_allowance.is_nan());
        assert_eq!(r.total(), 17.0);
    }
}
