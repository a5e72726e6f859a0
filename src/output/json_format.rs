//! JSON output formatting.

use crate::types::SalaryRecord;
use std::io;

/// Print a ledger listing in JSON format.
pub fn print_json(records: &[&SalaryRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
