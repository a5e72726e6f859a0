//! Plain text output formatting.
//!
//! Produces the human-readable ledger table with row numbers and a totals
//! footer, plus the severity-tagged notification helpers.

use crate::output::format_currency;
use crate::types::{SalaryRecord, Totals};
use console::style;
use std::io::{self, Write};

/// Print a ledger listing as a table with 1-based row numbers and a totals
/// footer row.
pub fn print_plain(records: &[&SalaryRecord], totals: &Totals) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if records.is_empty() {
        writeln!(out, "  {}", style("No salary records found").dim())?;
        return Ok(());
    }

    let rule = "─".repeat(92);

    writeln!(out)?;
    writeln!(out, "  {}", style(&rule).dim())?;
    writeln!(
        out,
        "  {:>4}  {:<20}  {:<30}  {:>9}  {:>9}  {:>9}  {:>9}",
        style("#").bold(),
        style("CLIENT").bold(),
        style("DESIGNATION").bold(),
        style("BASIC").bold(),
        style("HRA").bold(),
        style("DA").bold(),
        style("OTHER").bold(),
    )?;
    writeln!(out, "  {}", style(&rule).dim())?;

    for (index, record) in records.iter().enumerate() {
        writeln!(
            out,
            "  {:>4}  {:<20}  {:<30}  {:>9}  {:>9}  {:>9}  {:>9}",
            index + 1,
            truncate_string(record.client_or_na(), 20),
            truncate_string(&record.designation, 30),
            format_currency(record.basic),
            format_currency(record.hra),
            format_currency(record.da),
            format_currency(record.other_allowance),
        )?;
    }

    writeln!(out, "  {}", style(&rule).dim())?;
    writeln!(
        out,
        "  {:>4}  {:<20}  {:<30}  {:>9}  {:>9}  {:>9}  {:>9}",
        "",
        "",
        style("TOTAL").bold(),
        style(format_currency(totals.basic)).green().bold(),
        style(format_currency(totals.hra)).green().bold(),
        style(format_currency(totals.da)).green().bold(),
        style(format_currency(totals.other)).green().bold(),
    )?;
    writeln!(out, "  {}", style(&rule).dim())?;
    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }
}
