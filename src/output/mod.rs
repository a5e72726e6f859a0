//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of ledger
//! listings, plus the severity-tagged notification helpers the commands
//! report outcomes through.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::print_csv;
pub use json_format::print_json;
pub use plain::{print_error, print_info, print_plain, print_success, print_warning};

use crate::cli::OutputFormat;
use crate::types::{SalaryRecord, Totals};
use std::io;

/// Format and print a ledger listing according to the specified format.
pub fn format_records(
    records: &[&SalaryRecord],
    totals: &Totals,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_plain(records, totals),
        OutputFormat::Json => json_format::print_json(records),
        OutputFormat::Csv => csv_format::print_csv(records),
    }
}

/// Format an amount as currency with two decimal places, corrupted
/// (non-finite) values rendered as zero.
pub fn format_currency(value: f64) -> String {
    format!("{:.2}", crate::types::amount_or_zero(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10.0), "10.00");
        assert_eq!(format_currency(7.125), "7.13");
        assert_eq!(format_currency(f64::NAN), "0.00");
    }
}
