//! Edit subcommand implementation.
//!
//! Handles the `paybook edit <row>` command. Mirrors the form-edit flow:
//! `begin_edit` pre-fills the record, the flags override individual fields,
//! and `commit_edit` replaces it in place.

use crate::cli::{row_to_index, warn_on_persistence, CliContext};
use crate::error::CliResult;
use crate::output;
use clap::Parser;

/// Edit a salary record in place.
#[derive(Parser, Debug)]
pub struct EditCommand {
    /// Row number to edit (as shown by 'paybook list')
    #[arg(value_name = "ROW")]
    pub row: usize,

    /// New client
    #[arg(short, long)]
    pub client: Option<String>,

    /// New designation
    #[arg(short, long)]
    pub designation: Option<String>,

    /// New basic pay
    #[arg(short, long, allow_negative_numbers = true)]
    pub basic: Option<f64>,

    /// New house rent allowance
    #[arg(long, allow_negative_numbers = true)]
    pub hra: Option<f64>,

    /// New dearness allowance
    #[arg(long, allow_negative_numbers = true)]
    pub da: Option<f64>,

    /// New other allowance
    #[arg(short, long, allow_negative_numbers = true)]
    pub other: Option<f64>,
}

impl EditCommand {
    fn has_changes(&self) -> bool {
        self.client.is_some()
            || self.designation.is_some()
            || self.basic.is_some()
            || self.hra.is_some()
            || self.da.is_some()
            || self.other.is_some()
    }

    /// Execute the edit command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut ledger = ctx.open_ledger()?;
        let index = row_to_index(self.row)?;

        let mut record = ledger.begin_edit(index)?;

        if !self.has_changes() {
            ledger.cancel_edit();
            if !ctx.quiet {
                output::print_info("No changes specified, record left as-is");
            }
            return Ok(());
        }

        // Unspecified fields keep their current values.
        if let Some(client) = &self.client {
            record.client = client.clone();
        }
        if let Some(designation) = &self.designation {
            record.designation = designation.clone();
        }
        if let Some(basic) = self.basic {
            record.basic = basic;
        }
        if let Some(hra) = self.hra {
            record.hra = hra;
        }
        if let Some(da) = self.da {
            record.da = da;
        }
        if let Some(other) = self.other {
            record.other_allowance = other;
        }

        warn_on_persistence(ledger.commit_edit(record))?;

        if !ctx.quiet {
            output::print_success("Record updated successfully");
        }

        Ok(())
    }
}
