//! Session facade over the store and summary calculations.
//!
//! This module defines [`TimesheetSession`], the surface a front end
//! drives: it owns the record store, validates submissions, and exposes
//! the summary projections and report assembly over the current records.

use tracing::{info, warn};

use crate::aggregation::{
    EmployeeBiweekly, EmployeeTotal, EmployeeWeekly, biweekly_minutes, total_minutes,
    weekly_minutes,
};
use crate::error::TimesheetResult;
use crate::models::{EntryForm, TimeEntry};
use crate::parse::parse_entry;
use crate::report::{self, HoursReport};
use crate::store::RecordStore;

/// A single-user timesheet editing session.
///
/// The session owns an ordered [`RecordStore`] and keeps it consistent:
/// only submissions that pass validation are stored, and every summary
/// is recomputed from the current records on each call, so the views
/// can never drift from the stored entries.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::EntryForm;
/// use timesheet_engine::session::TimesheetSession;
/// use rust_decimal::Decimal;
///
/// let mut session = TimesheetSession::new();
/// session
///     .submit_entry(&EntryForm {
///         employee_name: "Alice".to_string(),
///         check_in_date: "2024-01-08".to_string(),
///         check_in_hour: "9".to_string(),
///         check_in_minute: "0".to_string(),
///         check_in_meridiem: "AM".to_string(),
///         check_out_date: "2024-01-08".to_string(),
///         check_out_hour: "5".to_string(),
///         check_out_minute: "0".to_string(),
///         check_out_meridiem: "PM".to_string(),
///     })
///     .unwrap();
///
/// let totals = session.compute_totals();
/// assert_eq!(totals[0].employee, "Alice");
/// assert_eq!(totals[0].minutes, Decimal::from(480));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimesheetSession {
    store: RecordStore,
}

impl TimesheetSession {
    /// Creates a session with no records.
    pub fn new() -> TimesheetSession {
        TimesheetSession {
            store: RecordStore::new(),
        }
    }

    /// Validates a form submission and appends it to the record list.
    ///
    /// Returns the accepted entry so the caller can display what was
    /// stored, including any minute-60 rollover applied during parsing.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the record list is
    /// unchanged on error.
    pub fn submit_entry(&mut self, form: &EntryForm) -> TimesheetResult<TimeEntry> {
        match parse_entry(form) {
            Ok(entry) => {
                info!(
                    employee = entry.employee_name(),
                    check_in = %entry.check_in(),
                    check_out = %entry.check_out(),
                    minutes = %entry.minutes_worked(),
                    "Entry accepted"
                );
                self.store.add(entry.clone());
                Ok(entry)
            }
            Err(error) => {
                warn!(error = %error, "Entry rejected");
                Err(error)
            }
        }
    }

    /// Removes the entry at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TimesheetError::IndexOutOfRange`] when
    /// `index` does not refer to a stored entry. That usually means the
    /// caller's displayed rows are stale; the record list is unchanged.
    pub fn delete_entry(&mut self, index: usize) -> TimesheetResult<TimeEntry> {
        match self.store.remove_at(index) {
            Ok(entry) => {
                info!(index, employee = entry.employee_name(), "Entry removed");
                Ok(entry)
            }
            Err(error) => {
                warn!(index, error = %error, "Removal rejected");
                Err(error)
            }
        }
    }

    /// Removes every record, returning the session to its initial state.
    pub fn reset(&mut self) {
        let removed = self.store.len();
        self.store.clear();
        info!(removed, "Session reset");
    }

    /// The stored entries in submission order.
    pub fn entries(&self) -> &[TimeEntry] {
        self.store.entries()
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true when the session holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Computes the per-employee totals over the current records.
    pub fn compute_totals(&self) -> Vec<EmployeeTotal> {
        total_minutes(self.store.entries())
    }

    /// Computes the weekly breakdown over the current records.
    pub fn compute_weekly(&self) -> Vec<EmployeeWeekly> {
        weekly_minutes(self.store.entries())
    }

    /// Computes the biweekly breakdown over the current records.
    pub fn compute_biweekly(&self) -> Vec<EmployeeBiweekly> {
        biweekly_minutes(self.store.entries())
    }

    /// Assembles the hours report payload over the current records.
    pub fn build_report(&self) -> HoursReport {
        let report = report::build_report(self.store.entries());
        info!(
            report_id = %report.report_id,
            records = report.daily_rows.len(),
            employees = report.summary_rows.len(),
            "Report assembled"
        );
        report
    }
}
