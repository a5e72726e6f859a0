//! CSV output formatting.

use crate::types::{ExportRow, SalaryRecord};
use std::io;

/// Print a ledger listing in CSV format (one export row per record).
pub fn print_csv(records: &[&SalaryRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    for record in records {
        wtr.serialize(ExportRow::from(*record))?;
    }

    wtr.flush()?;
    Ok(())
}
