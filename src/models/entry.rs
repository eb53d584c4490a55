//! Validated time entry model.
//!
//! This module defines the TimeEntry struct, the validated record the
//! store and every summary calculation operate on.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{TimesheetError, TimesheetResult};
use crate::format::format_duration;

/// Represents one validated check-in/check-out record.
///
/// A `TimeEntry` can only be built through [`TimeEntry::new`], which
/// guarantees a non-empty trimmed employee name and a check-out instant
/// strictly after check-in. The fields are private so a stored entry can
/// never violate those rules; the type serializes but deliberately does
/// not deserialize.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::TimeEntry;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let check_in =
///     NaiveDateTime::parse_from_str("2024-01-08 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out =
///     NaiveDateTime::parse_from_str("2024-01-08 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let entry = TimeEntry::new("Alice", check_in, check_out).unwrap();
/// assert_eq!(entry.minutes_worked(), Decimal::from(480));
/// assert_eq!(entry.formatted_duration(), "8:00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    employee_name: String,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    minutes_worked: Decimal,
}

impl TimeEntry {
    /// Builds a validated entry from an employee name and two instants.
    ///
    /// The name is trimmed before it is stored. The worked duration is
    /// computed once here, in minutes, and kept alongside the instants.
    ///
    /// # Errors
    ///
    /// Returns [`TimesheetError::MissingField`] when the trimmed name is
    /// empty, and [`TimesheetError::NonPositiveDuration`] when check-out
    /// is not strictly after check-in.
    pub fn new(
        employee_name: &str,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    ) -> TimesheetResult<TimeEntry> {
        let trimmed = employee_name.trim();
        if trimmed.is_empty() {
            return Err(TimesheetError::MissingField {
                field: "employee_name".to_string(),
            });
        }

        if check_out <= check_in {
            return Err(TimesheetError::NonPositiveDuration {
                check_in,
                check_out,
            });
        }

        let worked_seconds = (check_out - check_in).num_seconds();
        let minutes_worked =
            (Decimal::new(worked_seconds, 0) / Decimal::new(60, 0)).normalize();

        Ok(TimeEntry {
            employee_name: trimmed.to_string(),
            check_in,
            check_out,
            minutes_worked,
        })
    }

    /// The trimmed employee name.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// The check-in instant.
    pub fn check_in(&self) -> NaiveDateTime {
        self.check_in
    }

    /// The check-out instant.
    pub fn check_out(&self) -> NaiveDateTime {
        self.check_out
    }

    /// The calendar date of the check-in instant.
    ///
    /// Weekly and biweekly summaries bucket an entry by this date alone,
    /// even when the entry crosses midnight.
    pub fn check_in_date(&self) -> NaiveDate {
        self.check_in.date()
    }

    /// The worked duration in minutes.
    pub fn minutes_worked(&self) -> Decimal {
        self.minutes_worked
    }

    /// The check-in instant rendered as `YYYY-MM-DD H:MM AM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::TimeEntry;
    /// use chrono::NaiveDateTime;
    ///
    /// let check_in =
    ///     NaiveDateTime::parse_from_str("2024-01-08 09:05:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let check_out =
    ///     NaiveDateTime::parse_from_str("2024-01-08 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let entry = TimeEntry::new("Alice", check_in, check_out).unwrap();
    /// assert_eq!(entry.check_in_label(), "2024-01-08 9:05 AM");
    /// assert_eq!(entry.check_out_label(), "2024-01-08 5:00 PM");
    /// ```
    pub fn check_in_label(&self) -> String {
        instant_label(self.check_in)
    }

    /// The check-out instant rendered as `YYYY-MM-DD H:MM AM`.
    pub fn check_out_label(&self) -> String {
        instant_label(self.check_out)
    }

    /// The worked duration rendered as `H:MM`.
    pub fn formatted_duration(&self) -> String {
        format_duration(self.minutes_worked)
    }
}

/// Renders an instant on the 12-hour clock, `2024-01-08 9:05 AM`.
///
/// The clock hour is unpadded and the minute is always two digits.
fn instant_label(instant: NaiveDateTime) -> String {
    let (is_pm, clock_hour) = instant.time().hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!(
        "{} {}:{:02} {}",
        instant.date(),
        clock_hour,
        instant.time().minute(),
        meridiem
    )
}
