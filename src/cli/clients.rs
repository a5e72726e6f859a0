//! Clients subcommand implementation.
//!
//! Handles the `paybook clients` command for managing the client registry.

use crate::cli::{warn_on_persistence, CliContext};
use crate::error::CliResult;
use crate::output;
use clap::{Parser, Subcommand};

/// Manage the client registry.
#[derive(Parser, Debug)]
pub struct ClientsCommand {
    #[command(subcommand)]
    pub action: ClientsAction,
}

/// Client registry actions.
#[derive(Subcommand, Debug)]
pub enum ClientsAction {
    /// List all registered clients in insertion order
    List,

    /// Add a new client to the registry
    Add {
        /// Client name (leading/trailing whitespace is trimmed)
        name: String,
    },
}

impl ClientsCommand {
    /// Execute the clients command.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.action {
            ClientsAction::List => self.list_clients(ctx),
            ClientsAction::Add { name } => self.add_client(name, ctx),
        }
    }

    fn list_clients(&self, ctx: &CliContext) -> CliResult<()> {
        let ledger = ctx.open_ledger()?;
        let clients = ledger.clients();

        if clients.is_empty() {
            if !ctx.quiet {
                println!("No clients registered.");
            }
            return Ok(());
        }

        for (index, client) in clients.iter().enumerate() {
            println!("{:>4}  {}", index + 1, client);
        }

        Ok(())
    }

    fn add_client(&self, name: &str, ctx: &CliContext) -> CliResult<()> {
        let mut ledger = ctx.open_ledger()?;

        if let Some(added) = warn_on_persistence(ledger.add_client(name))? {
            if !ctx.quiet {
                output::print_success(&format!("Client \"{}\" added successfully", added));
            }
        }

        Ok(())
    }
}
