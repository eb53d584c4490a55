//! Week bucketing for summary calculations.

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the Monday on or before the given date.
///
/// Weeks run Monday through Sunday, so this Monday is the key that
/// identifies a date's week in the weekly and biweekly summaries.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::aggregation::week_start_of;
///
/// // 2024-01-10 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(week_start_of(wednesday), monday);
/// assert_eq!(week_start_of(monday), monday);
/// ```
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
