//! Export subcommand implementation.
//!
//! Handles the `paybook export` command: flattens the ledger into export
//! rows and hands them to the spreadsheet writer (the `csv` crate), naming
//! the file with the current date.

use crate::cli::CliContext;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Spreadsheet export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values (opens in any spreadsheet application)
    Csv,
    /// JSON array of export rows
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Export records to a spreadsheet file.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to Salary_Records_<date>.<ext>)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output_file")]
    pub stdout: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let ledger = ctx.open_ledger()?;
        let rows = ledger.export_rows();

        let content = match self.format {
            ExportFormat::Json => serde_json::to_string_pretty(&rows)
                .map_err(|e| CliError::Other(e.to_string()))?,
            ExportFormat::Csv => generate_csv(&rows)?,
        };

        if self.stdout {
            println!("{}", content);
            return Ok(());
        }

        let path = match &self.output_file {
            Some(path) => path.clone(),
            None => self.default_path(ctx),
        };

        fs::write(&path, &content)
            .map_err(|e| CliError::Other(format!("failed to write file: {}", e)))?;

        if !ctx.quiet {
            output::print_success(&format!(
                "Exported {} records to {}",
                rows.len(),
                path.display()
            ));
        }

        Ok(())
    }

    /// Default export path: Salary_Records_<YYYY-MM-DD>.<ext> in the
    /// configured export directory, or the current directory.
    fn default_path(&self, ctx: &CliContext) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let name = format!("Salary_Records_{}.{}", date, self.format.extension());

        match &ctx.settings.export_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Generate CSV output. The header row is written even when the ledger
/// is empty.
fn generate_csv(rows: &[crate::types::ExportRow]) -> CliResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "Client",
        "Designation",
        "Basic",
        "HRA",
        "DA",
        "Other Allowance",
        "Total",
    ])
    .map_err(|e| CliError::Other(e.to_string()))?;

    for row in rows {
        wtr.write_record([
            row.client.as_str(),
            row.designation.as_str(),
            &format_amount(row.basic),
            &format_amount(row.hra),
            &format_amount(row.da),
            &format_amount(row.other_allowance),
            &format_amount(row.total),
        ])
        .map_err(|e| CliError::Other(e.to_string()))?;
    }

    String::from_utf8(
        wtr.into_inner()
            .map_err(|e| CliError::Other(e.to_string()))?,
    )
    .map_err(|e| CliError::Other(e.to_string()))
}

/// Render an amount for the spreadsheet, corrupted values as zero.
fn format_amount(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExportRow, SalaryRecord};

    #[test]
    fn test_generate_csv_includes_header_and_totals() {
        let record = SalaryRecord::new("XYZ Inc.", "Supervisor_1_Active", 11.0, 12.0, 13.0, 14.0);
        let csv = generate_csv(&[ExportRow::from(&record)]).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Client,Designation,Basic,HRA,DA,Other Allowance,Total"
        );
        assert_eq!(
            lines.next().unwrap(),
            "XYZ Inc.,Supervisor_1_Active,11,12,13,14,50"
        );
    }

    #[test]
    fn test_generate_csv_empty_ledger_is_header_only() {
        let csv = generate_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
