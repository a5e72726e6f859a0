//! Flattened export row for spreadsheet output.

use crate::types::SalaryRecord;
use serde::Serialize;

/// One spreadsheet row: a record plus its computed total.
///
/// Field names are serialized as the spreadsheet column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Client")]
    pub client: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "Basic")]
    pub basic: f64,
    #[serde(rename = "HRA")]
    pub hra: f64,
    #[serde(rename = "DA")]
    pub da: f64,
    #[serde(rename = "Other Allowance")]
    pub other_allowance: f64,
    #[serde(rename = "Total")]
    pub total: f64,
}

impl From<&SalaryRecord> for ExportRow {
    fn from(record: &SalaryRecord) -> Self {
        Self {
            client: record.client_or_na().to_string(),
            designation: record.designation.clone(),
            basic: record.basic,
            hra: record.hra,
            da: record.da,
            other_allowance: record.other_allowance,
            total: record.total(),
        }
    }
}
