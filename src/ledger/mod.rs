//! The salary ledger: an ordered sequence of salary records plus the client
//! registry, backed by slot-based JSON persistence.
//!
//! The ledger is loaded once at startup and re-serializes the affected slot
//! on every mutation. Persistence is best-effort: a failed write surfaces as
//! [`LedgerError::Persistence`] AFTER the in-memory mutation has been
//! applied, so memory and disk may diverge until the next successful write.
//!
//! Whether a submit inserts or replaces is governed by a single-slot edit
//! cursor: `begin_edit` enters editing, and `commit_edit`, `cancel_edit`,
//! and `add` all exit it.

mod seed;

pub use seed::{default_clients, demo_records};

use crate::error::{LedgerError, LedgerResult};
use crate::storage::{Slot, StateBackend};
use crate::types::{amount_or_zero, ExportRow, SalaryRecord, Totals};
use tracing::{debug, warn};

/// Ordered salary records, client registry, and the edit cursor.
pub struct SalaryLedger {
    records: Vec<SalaryRecord>,
    clients: Vec<String>,
    edit_cursor: Option<usize>,
    backend: Box<dyn StateBackend>,
    seeded: bool,
}

impl SalaryLedger {
    /// Load the ledger from the given backend.
    ///
    /// A missing records slot is seeded with the demonstration dataset and
    /// persisted; an unparseable one falls back to the same dataset without
    /// overwriting whatever is on disk. A missing or unparseable clients
    /// slot falls back to the five default client names.
    pub fn load(backend: Box<dyn StateBackend>) -> Self {
        let mut seeded = false;

        let records = match backend.read(Slot::Records) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<SalaryRecord>>(&json) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "corrupted records slot, falling back to demo data");
                    demo_records()
                }
            },
            Ok(None) => {
                seeded = true;
                demo_records()
            }
            Err(e) => {
                warn!(error = %e, "could not read records slot, falling back to demo data");
                demo_records()
            }
        };

        let clients = match backend.read(Slot::Clients) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(clients) => clients,
                Err(e) => {
                    warn!(error = %e, "corrupted clients slot, falling back to defaults");
                    default_clients()
                }
            },
            Ok(None) => default_clients(),
            Err(e) => {
                warn!(error = %e, "could not read clients slot, falling back to defaults");
                default_clients()
            }
        };

        let mut ledger = Self {
            records,
            clients,
            edit_cursor: None,
            backend,
            seeded,
        };

        if seeded {
            debug!(count = ledger.records.len(), "seeded ledger with demo records");
            if let Err(e) = ledger.persist_records() {
                warn!(error = %e, "could not persist seeded demo records");
            }
        }

        ledger
    }

    /// Whether this load seeded the demonstration dataset (first run).
    pub fn was_seeded(&self) -> bool {
        self.seeded
    }

    /// All records in insertion order, optionally filtered by a
    /// case-insensitive substring match on client or designation.
    pub fn list(&self, filter: Option<&str>) -> Vec<&SalaryRecord> {
        match filter {
            Some(needle) if !needle.is_empty() => self
                .records
                .iter()
                .filter(|r| r.matches(needle))
                .collect(),
            _ => self.records.iter().collect(),
        }
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The client registry in insertion order.
    pub fn clients(&self) -> &[String] {
        &self.clients
    }

    /// Validate and append a record. Exits edit mode.
    pub fn add(&mut self, record: SalaryRecord) -> LedgerResult<()> {
        record
            .validate()
            .map_err(|e| LedgerError::InvalidRecord(e.to_string()))?;

        debug!(client = %record.client, designation = %record.designation, "adding record");
        self.records.push(record);
        self.edit_cursor = None;
        self.persist_records()?;
        Ok(())
    }

    /// Enter edit mode for the record at `index`, returning a copy of it
    /// for pre-filling an edit form.
    pub fn begin_edit(&mut self, index: usize) -> LedgerResult<SalaryRecord> {
        let record = self
            .records
            .get(index)
            .ok_or(LedgerError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            })?
            .clone();

        self.edit_cursor = Some(index);
        Ok(record)
    }

    /// Validate and replace the record under the edit cursor, in place.
    /// Requires a prior `begin_edit`. Exits edit mode.
    pub fn commit_edit(&mut self, record: SalaryRecord) -> LedgerResult<()> {
        let index = self.edit_cursor.ok_or(LedgerError::NoEditInProgress)?;

        record
            .validate()
            .map_err(|e| LedgerError::InvalidRecord(e.to_string()))?;

        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfBounds { index, len })?;

        debug!(index, "replacing record in place");
        *slot = record;
        self.edit_cursor = None;
        self.persist_records()?;
        Ok(())
    }

    /// Exit edit mode without touching any data.
    pub fn cancel_edit(&mut self) {
        self.edit_cursor = None;
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    /// Remove the record at `index`, shifting later records down by one.
    ///
    /// Deletion is permanent; obtaining user confirmation is the caller's
    /// responsibility.
    pub fn delete(&mut self, index: usize) -> LedgerResult<()> {
        if index >= self.records.len() {
            return Err(LedgerError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }

        debug!(index, "deleting record");
        self.records.remove(index);

        // Keep the edit cursor on the record it was set on; drop it if that
        // record is the one just deleted.
        self.edit_cursor = match self.edit_cursor {
            Some(cursor) if cursor == index => None,
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };

        self.persist_records()?;
        Ok(())
    }

    /// Column-wise sums across all records, counting corrupted (non-finite)
    /// stored amounts as zero.
    pub fn totals(&self) -> Totals {
        self.records.iter().fold(Totals::default(), |mut acc, r| {
            acc.basic += amount_or_zero(r.basic);
            acc.hra += amount_or_zero(r.hra);
            acc.da += amount_or_zero(r.da);
            acc.other += amount_or_zero(r.other_allowance);
            acc
        })
    }

    /// Trim and append a new client name to the registry.
    ///
    /// Returns the trimmed name on success. Duplicate detection is an exact
    /// (case-sensitive) match.
    pub fn add_client(&mut self, name: &str) -> LedgerResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidClient(
                "client name must not be empty".to_string(),
            ));
        }
        if self.clients.iter().any(|c| c == name) {
            return Err(LedgerError::DuplicateClient(name.to_string()));
        }

        debug!(client = name, "adding client");
        self.clients.push(name.to_string());
        self.persist_clients()?;
        Ok(name.to_string())
    }

    /// Flatten every record into a spreadsheet export row.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.records.iter().map(ExportRow::from).collect()
    }

    /// Give the backend back, e.g. to reload the ledger from it.
    pub fn into_backend(self) -> Box<dyn StateBackend> {
        self.backend
    }

    fn persist_records(&self) -> LedgerResult<()> {
        let json = serde_json::to_string_pretty(&self.records).map_err(|e| {
            crate::error::StorageError::SerializeFailed {
                slot: Slot::Records.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.backend.write(Slot::Records, &json)?;
        Ok(())
    }

    fn persist_clients(&self) -> LedgerResult<()> {
        let json = serde_json::to_string_pretty(&self.clients).map_err(|e| {
            crate::error::StorageError::SerializeFailed {
                slot: Slot::Clients.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.backend.write(Slot::Clients, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn empty_ledger() -> SalaryLedger {
        let backend = MemoryBackend::new();
        backend.preload(Slot::Records, "[]");
        backend.preload(Slot::Clients, r#"["SAMASHTI", "ABC Corporation"]"#);
        SalaryLedger::load(Box::new(backend))
    }

    fn record(designation: &str, basic: f64, hra: f64, da: f64, other: f64) -> SalaryRecord {
        SalaryRecord::new("SAMASHTI", designation, basic, hra, da, other)
    }

    #[test]
    fn test_first_run_seeds_demo_data() {
        let ledger = SalaryLedger::load(Box::new(MemoryBackend::new()));
        assert!(ledger.was_seeded());
        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.clients().len(), 5);

        // The seed is persisted, so a reload is no longer a first run.
        let reloaded = SalaryLedger::load(ledger.into_backend());
        assert!(!reloaded.was_seeded());
        assert_eq!(reloaded.len(), 6);
    }

    #[test]
    fn test_corrupted_records_slot_falls_back_to_demo_data() {
        let backend = MemoryBackend::new();
        backend.preload(Slot::Records, "{not json[");
        let ledger = SalaryLedger::load(Box::new(backend));
        assert_eq!(ledger.len(), 6);
    }

    #[test]
    fn test_add_appends_at_last_position() {
        let mut ledger = empty_ledger();
        ledger.add(record("Supervisor_1_Active", 1.0, 2.0, 3.0, 4.0)).unwrap();
        ledger.add(record("Janitor_1_Active", 5.0, 6.0, 7.0, 8.0)).unwrap();

        let listed = ledger.list(None);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].designation, "Janitor_1_Active");
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut ledger = empty_ledger();
        let result = ledger.add(record("Supervisor_1_Active", -1.0, 2.0, 3.0, 4.0));
        assert!(matches!(result, Err(LedgerError::InvalidRecord(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_non_numeric_amount() {
        let mut ledger = empty_ledger();
        let result = ledger.add(record("Supervisor_1_Active", 1.0, f64::NAN, 3.0, 4.0));
        assert!(matches!(result, Err(LedgerError::InvalidRecord(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_designation() {
        let mut ledger = empty_ledger();
        let result = ledger.add(record("", 1.0, 2.0, 3.0, 4.0));
        assert!(matches!(result, Err(LedgerError::InvalidRecord(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_delete_shifts_later_records_down() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 1.0, 1.0, 1.0, 1.0)).unwrap();
        ledger.add(record("B_1_Active", 2.0, 2.0, 2.0, 2.0)).unwrap();
        ledger.add(record("C_1_Active", 3.0, 3.0, 3.0, 3.0)).unwrap();

        ledger.delete(1).unwrap();

        let listed = ledger.list(None);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].designation, "A_1_Active");
        assert_eq!(listed[1].designation, "C_1_Active");
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.delete(0),
            Err(LedgerError::IndexOutOfBounds { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_totals() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 10.0, 20.0, 30.0, 40.0)).unwrap();
        ledger.add(record("B_1_Active", 7.0, 8.0, 9.0, 10.0)).unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.basic, 17.0);
        assert_eq!(totals.hra, 28.0);
        assert_eq!(totals.da, 39.0);
        assert_eq!(totals.other, 50.0);
        assert_eq!(totals.grand(), 134.0);
    }

    #[test]
    fn test_totals_treat_corrupted_amounts_as_zero() {
        let backend = MemoryBackend::new();
        backend.preload(
            Slot::Records,
            r#"[{"client": "X", "designation": "A_1_Active",
                 "basic": "garbage", "hra": 8, "da": 9, "otherAllowance": 10}]"#,
        );
        let ledger = SalaryLedger::load(Box::new(backend));

        let totals = ledger.totals();
        assert_eq!(totals.basic, 0.0);
        assert_eq!(totals.hra, 8.0);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut ledger = empty_ledger();
        ledger.add(record("Supervisor_1_Active", 1.0, 1.0, 1.0, 1.0)).unwrap();
        ledger.add(record("Janitor_1_Active", 2.0, 2.0, 2.0, 2.0)).unwrap();

        let matched = ledger.list(Some("supervisor"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].designation, "Supervisor_1_Active");

        // Empty filter means no filter.
        assert_eq!(ledger.list(Some("")).len(), 2);

        // Client names match too.
        assert_eq!(ledger.list(Some("samashti")).len(), 2);
    }

    #[test]
    fn test_add_client_trims_and_persists() {
        let mut ledger = empty_ledger();
        let added = ledger.add_client("  XYZ Inc.  ").unwrap();
        assert_eq!(added, "XYZ Inc.");
        assert!(ledger.clients().contains(&"XYZ Inc.".to_string()));
    }

    #[test]
    fn test_add_client_rejects_empty() {
        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.add_client("   "),
            Err(LedgerError::InvalidClient(_))
        ));
    }

    #[test]
    fn test_add_client_rejects_exact_duplicate() {
        let mut ledger = empty_ledger();
        let before = ledger.clients().len();
        assert!(matches!(
            ledger.add_client("ABC Corporation"),
            Err(LedgerError::DuplicateClient(_))
        ));
        assert_eq!(ledger.clients().len(), before);

        // Uniqueness is case-sensitive: a different casing is a new client.
        ledger.add_client("abc corporation").unwrap();
    }

    #[test]
    fn test_commit_without_begin_fails() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 1.0, 1.0, 1.0, 1.0)).unwrap();

        let result = ledger.commit_edit(record("B_1_Active", 2.0, 2.0, 2.0, 2.0));
        assert!(matches!(result, Err(LedgerError::NoEditInProgress)));
    }

    #[test]
    fn test_begin_then_commit_replaces_in_place() {
        let mut ledger = empty_ledger();
        for d in ["A_1_Active", "B_1_Active", "C_1_Active", "D_1_Active"] {
            ledger.add(record(d, 1.0, 1.0, 1.0, 1.0)).unwrap();
        }

        let current = ledger.begin_edit(2).unwrap();
        assert_eq!(current.designation, "C_1_Active");
        assert!(ledger.is_editing());

        ledger.commit_edit(record("Edited_1_Active", 9.0, 9.0, 9.0, 9.0)).unwrap();
        assert!(!ledger.is_editing());

        let listed = ledger.list(None);
        assert_eq!(listed[2].designation, "Edited_1_Active");
        assert_eq!(listed[0].designation, "A_1_Active");
        assert_eq!(listed[1].designation, "B_1_Active");
        assert_eq!(listed[3].designation, "D_1_Active");
        assert_eq!(listed.len(), 4);
    }

    #[test]
    fn test_begin_edit_out_of_bounds() {
        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.begin_edit(5),
            Err(LedgerError::IndexOutOfBounds { .. })
        ));
        assert!(!ledger.is_editing());
    }

    #[test]
    fn test_cancel_edit_clears_cursor_without_mutating() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 1.0, 1.0, 1.0, 1.0)).unwrap();

        ledger.begin_edit(0).unwrap();
        ledger.cancel_edit();
        assert!(!ledger.is_editing());
        assert_eq!(ledger.list(None)[0].designation, "A_1_Active");

        // The next commit has nothing to target.
        assert!(matches!(
            ledger.commit_edit(record("B_1_Active", 1.0, 1.0, 1.0, 1.0)),
            Err(LedgerError::NoEditInProgress)
        ));
    }

    #[test]
    fn test_delete_before_edited_record_keeps_cursor_on_it() {
        let mut ledger = empty_ledger();
        for d in ["A_1_Active", "B_1_Active", "C_1_Active"] {
            ledger.add(record(d, 1.0, 1.0, 1.0, 1.0)).unwrap();
        }

        let current = ledger.begin_edit(1).unwrap();
        assert_eq!(current.designation, "B_1_Active");

        ledger.delete(0).unwrap();
        ledger.commit_edit(record("Edited_1_Active", 9.0, 9.0, 9.0, 9.0)).unwrap();

        let listed = ledger.list(None);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].designation, "Edited_1_Active");
        assert_eq!(listed[1].designation, "C_1_Active");
    }

    #[test]
    fn test_delete_of_edited_record_clears_cursor() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 1.0, 1.0, 1.0, 1.0)).unwrap();
        ledger.add(record("B_1_Active", 2.0, 2.0, 2.0, 2.0)).unwrap();

        ledger.begin_edit(1).unwrap();
        ledger.delete(1).unwrap();
        assert!(!ledger.is_editing());

        let result = ledger.commit_edit(record("C_1_Active", 3.0, 3.0, 3.0, 3.0));
        assert!(matches!(result, Err(LedgerError::NoEditInProgress)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_delete_after_edited_record_leaves_cursor_alone() {
        let mut ledger = empty_ledger();
        for d in ["A_1_Active", "B_1_Active", "C_1_Active"] {
            ledger.add(record(d, 1.0, 1.0, 1.0, 1.0)).unwrap();
        }

        ledger.begin_edit(0).unwrap();
        ledger.delete(2).unwrap();
        ledger.commit_edit(record("Edited_1_Active", 9.0, 9.0, 9.0, 9.0)).unwrap();

        let listed = ledger.list(None);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].designation, "Edited_1_Active");
        assert_eq!(listed[1].designation, "B_1_Active");
    }

    #[test]
    fn test_add_exits_edit_mode() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 1.0, 1.0, 1.0, 1.0)).unwrap();

        ledger.begin_edit(0).unwrap();
        ledger.add(record("B_1_Active", 2.0, 2.0, 2.0, 2.0)).unwrap();
        assert!(!ledger.is_editing());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_export_rows() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 10.0, 20.0, 30.0, 40.0)).unwrap();
        ledger
            .add(SalaryRecord::new("", "B_1_Active", 1.0, 2.0, 3.0, 4.0))
            .unwrap();

        let rows = ledger.export_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total, 100.0);
        assert_eq!(rows[1].client, "N/A");
    }

    #[test]
    fn test_roundtrip_through_backend() {
        let mut ledger = empty_ledger();
        ledger.add(record("A_1_Active", 1.5, 2.5, 3.5, 4.5)).unwrap();
        ledger.add(record("B_1_Active", 5.0, 6.0, 7.0, 8.0)).unwrap();
        ledger.add_client("New Client").unwrap();
        let expected: Vec<SalaryRecord> = ledger.list(None).into_iter().cloned().collect();
        let clients = ledger.clients().to_vec();

        let reloaded = SalaryLedger::load(ledger.into_backend());
        let listed: Vec<SalaryRecord> = reloaded.list(None).into_iter().cloned().collect();
        assert_eq!(listed, expected);
        assert_eq!(reloaded.clients(), clients.as_slice());
    }

    #[test]
    fn test_failed_persist_keeps_in_memory_mutation() {
        let backend = MemoryBackend::new();
        backend.preload(Slot::Records, "[]");
        backend.set_fail_writes(true);
        let mut ledger = SalaryLedger::load(Box::new(backend));

        let result = ledger.add(record("A_1_Active", 1.0, 1.0, 1.0, 1.0));
        assert!(matches!(result, Err(LedgerError::Persistence(_))));

        // Best-effort writes: the record stays in memory.
        assert_eq!(ledger.len(), 1);
    }
}
