//! Report payload assembly.
//!
//! This module builds the [`HoursReport`] payload: the daily report rows
//! and the total hours summary rows, stamped with a report id, a
//! generation timestamp, and the engine version. Rendering the payload
//! (PDF, HTML, CSV) is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::total_minutes;
use crate::format::format_duration;
use crate::models::TimeEntry;

/// One row of the daily report table.
///
/// Each stored entry produces exactly one row, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReportRow {
    /// The employee's name.
    pub employee: String,
    /// The check-in instant rendered as `YYYY-MM-DD H:MM AM`.
    pub check_in: String,
    /// The check-out instant rendered as `YYYY-MM-DD H:MM AM`.
    pub check_out: String,
    /// The entry's worked duration rendered as `H:MM`.
    pub daily_hours: String,
}

/// One row of the total hours summary table.
///
/// Each employee produces exactly one row, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The employee's name.
    pub employee: String,
    /// The employee's total worked duration rendered as `H:MM`.
    pub total_hours: String,
}

/// The complete payload for an exported hours report.
///
/// # Example
///
/// ```
/// use timesheet_engine::report::build_report;
///
/// let report = build_report(&[]);
/// assert!(report.daily_rows.is_empty());
/// assert!(report.summary_rows.is_empty());
/// assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the report.
    pub engine_version: String,
    /// Daily rows in entry submission order.
    pub daily_rows: Vec<DailyReportRow>,
    /// Summary rows in first-seen employee order.
    pub summary_rows: Vec<SummaryRow>,
}

/// Assembles the report payload for the given entries.
///
/// The daily rows mirror the entries one to one and the summary rows
/// mirror [`total_minutes`], so the payload always agrees with what the
/// record table and totals view display.
pub fn build_report(entries: &[TimeEntry]) -> HoursReport {
    let daily_rows = entries
        .iter()
        .map(|entry| DailyReportRow {
            employee: entry.employee_name().to_string(),
            check_in: entry.check_in_label(),
            check_out: entry.check_out_label(),
            daily_hours: entry.formatted_duration(),
        })
        .collect();

    let summary_rows = total_minutes(entries)
        .into_iter()
        .map(|total| SummaryRow {
            employee: total.employee,
            total_hours: format_duration(total.minutes),
        })
        .collect();

    HoursReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        daily_rows,
        summary_rows,
    }
}
