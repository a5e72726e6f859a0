//! Add subcommand implementation.
//!
//! Handles the `paybook add` command for inserting a salary record.

use crate::cli::{warn_on_persistence, CliContext};
use crate::error::CliResult;
use crate::output;
use crate::types::SalaryRecord;
use clap::Parser;

/// Add a salary record.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Client the position is billed to
    #[arg(short, long, default_value = "")]
    pub client: String,

    /// Designation of the staff member
    #[arg(short, long)]
    pub designation: String,

    /// Basic pay
    #[arg(short, long, allow_negative_numbers = true)]
    pub basic: f64,

    /// House rent allowance
    #[arg(long, allow_negative_numbers = true)]
    pub hra: f64,

    /// Dearness allowance
    #[arg(long, allow_negative_numbers = true)]
    pub da: f64,

    /// Other allowance
    #[arg(short, long, allow_negative_numbers = true, default_value = "0")]
    pub other: f64,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut ledger = ctx.open_ledger()?;

        let record = SalaryRecord::new(
            self.client.clone(),
            self.designation.clone(),
            self.basic,
            self.hra,
            self.da,
            self.other,
        );

        warn_on_persistence(ledger.add(record))?;

        if !ctx.quiet {
            output::print_success("Record added successfully");
            if !self.client.is_empty() && !ledger.clients().contains(&self.client) {
                output::print_info(&format!(
                    "Client '{}' is not in the registry; add it with 'paybook clients add'",
                    self.client
                ));
            }
        }

        Ok(())
    }
}
