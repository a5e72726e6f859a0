//! Core type definitions for salary ledger entries.
//!
//! Validation lives on the types themselves so invalid records are rejected
//! at the boundary, before they ever reach the ledger.

mod export;
mod record;

pub use export::ExportRow;
pub use record::{RecordError, SalaryRecord, Totals};

pub(crate) use record::amount_or_zero;
