//! In-memory record storage.
//!
//! This module defines the RecordStore, the ordered list of validated
//! entries that every summary and report is computed from.

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::TimeEntry;

/// Ordered, in-memory storage for validated time entries.
///
/// Entries keep their submission order, and removing one shifts every
/// later entry down by one index. Those indexes are the contract with a
/// front end that displays the records as numbered rows.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::TimeEntry;
/// use timesheet_engine::store::RecordStore;
/// use chrono::NaiveDateTime;
///
/// let check_in =
///     NaiveDateTime::parse_from_str("2024-01-08 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out =
///     NaiveDateTime::parse_from_str("2024-01-08 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let mut store = RecordStore::new();
/// store.add(TimeEntry::new("Alice", check_in, check_out).unwrap());
/// assert_eq!(store.len(), 1);
///
/// let removed = store.remove_at(0).unwrap();
/// assert_eq!(removed.employee_name(), "Alice");
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    entries: Vec<TimeEntry>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> RecordStore {
        RecordStore {
            entries: Vec::new(),
        }
    }

    /// Appends a validated entry to the end of the record list.
    pub fn add(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the entry at `index`.
    ///
    /// Later entries shift down by one, exactly like removing a row from
    /// a displayed table.
    ///
    /// # Errors
    ///
    /// Returns [`TimesheetError::IndexOutOfRange`] when `index` does not
    /// refer to a stored entry; the store is unchanged in that case.
    pub fn remove_at(&mut self, index: usize) -> TimesheetResult<TimeEntry> {
        if index >= self.entries.len() {
            return Err(TimesheetError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The stored entries in submission order.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
