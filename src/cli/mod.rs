//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `paybook list [FILTER]` - List salary records
//! - `paybook add` - Add a record
//! - `paybook edit <row>` - Edit a record in place
//! - `paybook delete <row>` - Delete a record
//! - `paybook totals` - Column totals
//! - `paybook clients list|add` - Manage the client registry
//! - `paybook export` - Export records to a spreadsheet file

mod add;
mod clients;
mod edit;
mod export;
mod list;

pub use add::AddCommand;
pub use clients::ClientsCommand;
pub use edit::EditCommand;
pub use export::ExportCommand;
pub use list::ListCommand;

use crate::config::AppSettings;
use crate::error::{CliResult, LedgerError};
use crate::ledger::SalaryLedger;
use crate::output;
use crate::storage::JsonStateStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// paybook - a local staff salary ledger.
///
/// Records salary line items per client and designation, persists them as
/// JSON under the application data directory, and exports them to a
/// spreadsheet file.
#[derive(Parser, Debug)]
#[command(name = "paybook")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A local staff salary ledger", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the ledger state (defaults to the app data dir)
    #[arg(long, global = true, value_name = "DIR", env = "PAYBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List salary records, optionally filtered
    #[command(alias = "ls")]
    List(ListCommand),

    /// Add a salary record
    #[command(alias = "a")]
    Add(AddCommand),

    /// Edit a salary record in place
    #[command(alias = "e")]
    Edit(EditCommand),

    /// Delete a salary record
    #[command(alias = "rm")]
    Delete(DeleteCommand),

    /// Show column totals across all records
    #[command(alias = "t")]
    Totals(TotalsCommand),

    /// Manage the client registry
    #[command(alias = "c")]
    Clients(ClientsCommand),

    /// Export records to a spreadsheet file
    #[command(alias = "x")]
    Export(ExportCommand),
}

/// Shared state handed to every subcommand handler.
pub struct CliContext {
    pub verbose: bool,
    pub quiet: bool,
    pub data_dir: Option<PathBuf>,
    pub settings: AppSettings,
}

impl CliContext {
    /// Open the ledger over the configured state directory.
    pub fn open_ledger(&self) -> CliResult<SalaryLedger> {
        let store = match &self.data_dir {
            Some(dir) => JsonStateStore::new(dir)?,
            None => JsonStateStore::open_default()?,
        };

        let ledger = SalaryLedger::load(Box::new(store));
        if ledger.was_seeded() && !self.quiet {
            output::print_info("Sample data loaded for demonstration");
        }
        Ok(ledger)
    }

    /// Resolve the output format from a flag, falling back to settings.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or_else(|| match self.settings.default_output_format.as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Plain,
        })
    }
}

/// Downgrade a persistence failure to a warning.
///
/// The in-memory mutation has already been applied; losing the write is
/// not a command failure. Returns `None` when the warning fired, since the
/// operation's success value is unavailable on that path.
pub(crate) fn warn_on_persistence<T>(result: Result<T, LedgerError>) -> CliResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(LedgerError::Persistence(e)) => {
            output::print_warning(&format!(
                "Your data was processed but could not be saved permanently: {}",
                e
            ));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Convert a user-facing 1-based row number to a ledger index.
pub(crate) fn row_to_index(row: usize) -> CliResult<usize> {
    row.checked_sub(1)
        .ok_or_else(|| crate::error::CliError::Other("row numbers start at 1".to_string()))
}

/// Delete a salary record after confirmation.
#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// Row number to delete (as shown by 'paybook list')
    #[arg(value_name = "ROW")]
    pub row: usize,

    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut ledger = ctx.open_ledger()?;
        let index = row_to_index(self.row)?;

        // Look the record up first so the prompt can name it.
        let record = ledger
            .list(None)
            .get(index)
            .cloned()
            .cloned()
            .ok_or(LedgerError::IndexOutOfBounds {
                index,
                len: ledger.len(),
            })?;

        // The ledger performs no confirmation itself; deletion is permanent.
        if !self.yes {
            println!(
                "Delete record {} ({} / {})? This cannot be undone. [y/N] ",
                self.row,
                record.client_or_na(),
                record.designation
            );
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        }

        warn_on_persistence(ledger.delete(index))?;

        if !ctx.quiet {
            output::print_success("Record deleted successfully!");
        }

        Ok(())
    }
}

/// Show column totals across all records.
#[derive(Parser, Debug)]
pub struct TotalsCommand {}

impl TotalsCommand {
    /// Execute the totals command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let ledger = ctx.open_ledger()?;
        let totals = ledger.totals();

        println!("Basic:            {:>12}", output::format_currency(totals.basic));
        println!("HRA:              {:>12}", output::format_currency(totals.hra));
        println!("DA:               {:>12}", output::format_currency(totals.da));
        println!("Other Allowance:  {:>12}", output::format_currency(totals.other));
        println!("Grand Total:      {:>12}", output::format_currency(totals.grand()));

        Ok(())
    }
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table with totals footer
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_index_is_one_based() {
        assert_eq!(row_to_index(1).unwrap(), 0);
        assert_eq!(row_to_index(5).unwrap(), 4);
        assert!(row_to_index(0).is_err());
    }

    #[test]
    fn test_warn_on_persistence_passes_value_through() {
        let ok: Result<u32, LedgerError> = Ok(7);
        assert_eq!(warn_on_persistence(ok).unwrap(), Some(7));

        let persist: Result<u32, LedgerError> =
            Err(LedgerError::Persistence(crate::error::StorageError::WriteFailed {
                slot: "salaryRecords".to_string(),
                reason: "store full".to_string(),
            }));
        assert_eq!(warn_on_persistence(persist).unwrap(), None);

        let other: Result<u32, LedgerError> = Err(LedgerError::NoEditInProgress);
        assert!(warn_on_persistence(other).is_err());
    }

    #[test]
    fn test_resolve_format_prefers_flag() {
        let ctx = CliContext {
            verbose: false,
            quiet: false,
            data_dir: None,
            settings: AppSettings {
                default_output_format: "json".to_string(),
                ..AppSettings::default()
            },
        };

        assert_eq!(ctx.resolve_format(Some(OutputFormat::Csv)), OutputFormat::Csv);
        assert_eq!(ctx.resolve_format(None), OutputFormat::Json);
    }
}
