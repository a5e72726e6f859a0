//! # paybook - A Local Staff Salary Ledger
//!
//! paybook records staff salary line items (client, designation, basic pay
//! and allowances), persists them as JSON under the application data
//! directory, and exports them to a spreadsheet file.
//!
//! ## Features
//!
//! - **Ordered Ledger**: Records keep insertion order; rows are addressed
//!   by position
//! - **Edit Cursor**: A single-slot cursor decides whether a submit inserts
//!   or replaces in place
//! - **Search**: Case-insensitive substring filtering on client and
//!   designation
//! - **Totals**: Column-wise sums recomputed on every listing
//! - **Client Registry**: Insertion-ordered set of client names
//! - **Best-Effort Persistence**: Failed writes warn instead of losing the
//!   in-memory change
//! - **Spreadsheet Export**: CSV (or JSON) files named with the current date
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use paybook::ledger::SalaryLedger;
//! use paybook::storage::JsonStateStore;
//! use paybook::types::SalaryRecord;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = JsonStateStore::open_default()?;
//!     let mut ledger = SalaryLedger::load(Box::new(store));
//!
//!     let record = SalaryRecord::new("ABC Corporation", "Supervisor", 1200.0, 400.0, 250.0, 50.0);
//!     ledger.add(record)?;
//!
//!     println!("{} records, grand total {:.2}", ledger.len(), ledger.totals().grand());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Record, totals, and export row definitions with validation
//! - [`ledger`] - The record store and its edit-cursor state machine
//! - [`storage`] - Slot-based JSON persistence behind a backend trait
//! - [`config`] - Application paths and settings
//! - [`error`] - Comprehensive error types
//! - [`output`] - Output formatting and notification utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, LedgerError, StorageError};
pub use ledger::SalaryLedger;
pub use storage::{JsonStateStore, MemoryBackend, Slot, StateBackend};
pub use types::{ExportRow, SalaryRecord, Totals};
