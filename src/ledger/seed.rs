//! Seed data for first-run and corrupted-state fallback.

use crate::types::SalaryRecord;

/// The five client names the registry starts with.
pub fn default_clients() -> Vec<String> {
    [
        "SAMASHTI",
        "ABC Corporation",
        "XYZ Inc.",
        "PQR Ltd.",
        "MNO Enterprises",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Six demonstration records shown when no persisted state exists.
pub fn demo_records() -> Vec<SalaryRecord> {
    vec![
        SalaryRecord::new(
            "SAMASHTI",
            "Sr. Facility Executive_1_Active",
            10.0,
            20.0,
            30.0,
            40.0,
        ),
        SalaryRecord::new(
            "ABC Corporation",
            "Facility Executive_1_Active",
            7.0,
            8.0,
            9.0,
            10.0,
        ),
        SalaryRecord::new("XYZ Inc.", "Supervisor_1_Active", 11.0, 12.0, 13.0, 14.0),
        SalaryRecord::new("PQR Ltd.", "Janitor_1_Active", 15.0, 16.0, 17.0, 18.0),
        SalaryRecord::new(
            "MNO Enterprises",
            "Office Assistant_1_Active",
            19.0,
            20.0,
            21.0,
            22.0,
        ),
        SalaryRecord::new("SAMASHTI", "Pantry Boy_1_Active", 23.0, 24.0, 25.0, 26.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_is_valid() {
        for record in demo_records() {
            assert!(record.validate().is_ok());
        }
        assert_eq!(default_clients().len(), 5);
        assert_eq!(demo_records().len(), 6);
    }
}
