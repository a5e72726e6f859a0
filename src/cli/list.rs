//! List subcommand implementation.
//!
//! Handles the `paybook list [FILTER]` command for viewing the ledger.

use crate::cli::{CliContext, OutputFormat};
use crate::error::CliResult;
use crate::output;
use clap::Parser;

/// List salary records, optionally filtered.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Case-insensitive substring filter on client or designation
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let ledger = ctx.open_ledger()?;
        let records = ledger.list(self.filter.as_deref());
        let totals = ledger.totals();
        let format = ctx.resolve_format(self.output);

        output::format_records(&records, &totals, format)?;

        if ctx.verbose && format == OutputFormat::Plain {
            let shown = records.len();
            let total = ledger.len();
            if shown != total {
                println!("  {} of {} records match", shown, total);
            }
        }

        Ok(())
    }
}
