//! Entry validation and parsing.
//!
//! This module converts raw form submissions into validated time entries.
//! Validation runs in submission order: required fields first, then the
//! check-in instant, then the check-out instant, then the duration rule
//! enforced by [`TimeEntry::new`]. The first failure is reported and the
//! rest of the form is not examined.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{EntryForm, Meridiem, TimeEntry};

/// Validates a form submission and builds a [`TimeEntry`] from it.
///
/// Dates must be real calendar dates in `YYYY-MM-DD` form. Clock hours
/// run 1 through 12 with an `AM`/`PM` meridiem, and minutes run 0 through
/// 60: a literal minute of 60 is accepted and rolls into the next hour,
/// so `11:60 PM` means midnight at the start of the following day.
///
/// # Errors
///
/// Returns [`TimesheetError::MissingField`] for the first blank field,
/// [`TimesheetError::UnparseableTime`] for the first component that fails
/// to parse or is out of range, and
/// [`TimesheetError::NonPositiveDuration`] when check-out is not strictly
/// after check-in.
///
/// # Examples
///
/// ```
/// use timesheet_engine::models::EntryForm;
/// use timesheet_engine::parse::parse_entry;
///
/// let form = EntryForm {
///     employee_name: "Alice".to_string(),
///     check_in_date: "2024-01-08".to_string(),
///     check_in_hour: "9".to_string(),
///     check_in_minute: "0".to_string(),
///     check_in_meridiem: "AM".to_string(),
///     check_out_date: "2024-01-08".to_string(),
///     check_out_hour: "5".to_string(),
///     check_out_minute: "0".to_string(),
///     check_out_meridiem: "PM".to_string(),
/// };
///
/// let entry = parse_entry(&form).unwrap();
/// assert_eq!(entry.employee_name(), "Alice");
/// assert_eq!(entry.formatted_duration(), "8:00");
/// ```
pub fn parse_entry(form: &EntryForm) -> TimesheetResult<TimeEntry> {
    require_fields(form)?;

    let check_in = parse_instant(
        &form.check_in_date,
        &form.check_in_hour,
        &form.check_in_minute,
        &form.check_in_meridiem,
        "check_in",
    )?;
    let check_out = parse_instant(
        &form.check_out_date,
        &form.check_out_hour,
        &form.check_out_minute,
        &form.check_out_meridiem,
        "check_out",
    )?;

    TimeEntry::new(&form.employee_name, check_in, check_out)
}

/// Rejects the first field that is blank after trimming.
fn require_fields(form: &EntryForm) -> TimesheetResult<()> {
    let fields = [
        ("employee_name", &form.employee_name),
        ("check_in_date", &form.check_in_date),
        ("check_in_hour", &form.check_in_hour),
        ("check_in_minute", &form.check_in_minute),
        ("check_in_meridiem", &form.check_in_meridiem),
        ("check_out_date", &form.check_out_date),
        ("check_out_hour", &form.check_out_hour),
        ("check_out_minute", &form.check_out_minute),
        ("check_out_meridiem", &form.check_out_meridiem),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(TimesheetError::MissingField {
                field: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Parses one date/hour/minute/meridiem group into an instant.
///
/// The instant is built as minutes past midnight on the parsed date, so
/// a minute of 60 rolls into the next hour and `11:60 PM` rolls across
/// midnight into the next day.
fn parse_instant(
    date: &str,
    hour: &str,
    minute: &str,
    meridiem: &str,
    field_prefix: &str,
) -> TimesheetResult<NaiveDateTime> {
    let date = parse_date(date, field_prefix)?;
    let clock_hour = parse_component(hour, 1, 12, field_prefix, "hour")?;
    let minute = parse_component(minute, 0, 60, field_prefix, "minute")?;
    let meridiem =
        Meridiem::parse(meridiem).ok_or_else(|| TimesheetError::UnparseableTime {
            field: format!("{field_prefix}_meridiem"),
            value: meridiem.trim().to_string(),
        })?;

    let minutes_past_midnight =
        i64::from(meridiem.to_24_hour(clock_hour)) * 60 + i64::from(minute);
    Ok(date.and_time(NaiveTime::MIN) + Duration::minutes(minutes_past_midnight))
}

/// Parses a `YYYY-MM-DD` date, rejecting anything that is not a real
/// calendar date.
fn parse_date(value: &str, field_prefix: &str) -> TimesheetResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| TimesheetError::UnparseableTime {
        field: format!("{field_prefix}_date"),
        value: trimmed.to_string(),
    })
}

/// Parses an integer component and checks it against an inclusive range.
fn parse_component(
    value: &str,
    min: u32,
    max: u32,
    field_prefix: &str,
    part: &str,
) -> TimesheetResult<u32> {
    let trimmed = value.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|parsed| (min..=max).contains(parsed))
        .ok_or_else(|| TimesheetError::UnparseableTime {
            field: format!("{field_prefix}_{part}"),
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn form(
        name: &str,
        check_in: (&str, &str, &str, &str),
        check_out: (&str, &str, &str, &str),
    ) -> EntryForm {
        EntryForm {
            employee_name: name.to_string(),
            check_in_date: check_in.0.to_string(),
            check_in_hour: check_in.1.to_string(),
            check_in_minute: check_in.2.to_string(),
            check_in_meridiem: check_in.3.to_string(),
            check_out_date: check_out.0.to_string(),
            check_out_hour: check_out.1.to_string(),
            check_out_minute: check_out.2.to_string(),
            check_out_meridiem: check_out.3.to_string(),
        }
    }

    fn day_shift(name: &str, date: &str) -> EntryForm {
        form(name, (date, "9", "0", "AM"), (date, "5", "0", "PM"))
    }

    // =========================================================================
    // Accepted submissions
    // =========================================================================

    #[test]
    fn test_standard_day_shift() {
        let entry = parse_entry(&day_shift("Alice", "2024-01-08")).unwrap();
        assert_eq!(entry.check_in(), make_datetime("2024-01-08", "09:00:00"));
        assert_eq!(entry.check_out(), make_datetime("2024-01-08", "17:00:00"));
        assert_eq!(entry.minutes_worked(), Decimal::from(480));
    }

    #[test]
    fn test_12_am_is_midnight() {
        let entry = parse_entry(&form(
            "Alice",
            ("2024-01-08", "12", "0", "AM"),
            ("2024-01-08", "12", "0", "PM"),
        ))
        .unwrap();
        assert_eq!(entry.check_in(), make_datetime("2024-01-08", "00:00:00"));
        assert_eq!(entry.check_out(), make_datetime("2024-01-08", "12:00:00"));
    }

    #[test]
    fn test_5_pm_is_17_hours() {
        let entry = parse_entry(&form(
            "Alice",
            ("2024-01-08", "5", "0", "AM"),
            ("2024-01-08", "5", "0", "PM"),
        ))
        .unwrap();
        assert_eq!(entry.check_in(), make_datetime("2024-01-08", "05:00:00"));
        assert_eq!(entry.check_out(), make_datetime("2024-01-08", "17:00:00"));
    }

    #[test]
    fn test_minute_60_rolls_into_next_hour() {
        let entry = parse_entry(&form(
            "Alice",
            ("2024-01-08", "9", "60", "AM"),
            ("2024-01-08", "5", "0", "PM"),
        ))
        .unwrap();
        assert_eq!(entry.check_in(), make_datetime("2024-01-08", "10:00:00"));
    }

    #[test]
    fn test_minute_60_rolls_across_midnight() {
        let entry = parse_entry(&form(
            "Alice",
            ("2024-01-08", "11", "0", "PM"),
            ("2024-01-08", "11", "60", "PM"),
        ))
        .unwrap();
        assert_eq!(entry.check_out(), make_datetime("2024-01-09", "00:00:00"));
        assert_eq!(entry.minutes_worked(), Decimal::from(60));
    }

    #[test]
    fn test_overnight_shift() {
        let entry = parse_entry(&form(
            "Alice",
            ("2024-01-08", "10", "0", "PM"),
            ("2024-01-09", "6", "0", "AM"),
        ))
        .unwrap();
        assert_eq!(entry.minutes_worked(), Decimal::from(480));
    }

    #[test]
    fn test_meridiem_is_case_insensitive() {
        let entry = parse_entry(&form(
            "Alice",
            ("2024-01-08", "9", "0", "am"),
            ("2024-01-08", "5", "0", "pm"),
        ))
        .unwrap();
        assert_eq!(entry.minutes_worked(), Decimal::from(480));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let entry = parse_entry(&form(
            "  Alice  ",
            (" 2024-01-08 ", " 9 ", " 0 ", " AM "),
            ("2024-01-08", "5", "0", "PM"),
        ))
        .unwrap();
        assert_eq!(entry.employee_name(), "Alice");
        assert_eq!(entry.check_in(), make_datetime("2024-01-08", "09:00:00"));
    }

    // =========================================================================
    // Missing fields
    // =========================================================================

    #[test]
    fn test_blank_name_is_reported_first() {
        let result = parse_entry(&EntryForm::default());
        assert!(matches!(
            result,
            Err(TimesheetError::MissingField { ref field }) if field == "employee_name"
        ));
    }

    #[test]
    fn test_blank_hour_is_reported_by_name() {
        let submission = form(
            "Alice",
            ("2024-01-08", "", "0", "AM"),
            ("2024-01-08", "5", "0", "PM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::MissingField { ref field }) if field == "check_in_hour"
        ));
    }

    #[test]
    fn test_whitespace_only_field_counts_as_missing() {
        let submission = form(
            "Alice",
            ("2024-01-08", "9", "0", "AM"),
            ("2024-01-08", "5", "0", "   "),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::MissingField { ref field }) if field == "check_out_meridiem"
        ));
    }

    // =========================================================================
    // Unparseable components
    // =========================================================================

    #[test]
    fn test_rejects_impossible_calendar_date() {
        let result = parse_entry(&day_shift("Alice", "2024-02-30"));
        assert!(matches!(
            result,
            Err(TimesheetError::UnparseableTime { ref field, ref value })
                if field == "check_in_date" && value == "2024-02-30"
        ));
    }

    #[test]
    fn test_rejects_malformed_date() {
        let result = parse_entry(&day_shift("Alice", "Jan 8 2024"));
        assert!(matches!(
            result,
            Err(TimesheetError::UnparseableTime { ref field, .. }) if field == "check_in_date"
        ));
    }

    #[test]
    fn test_rejects_hour_zero_and_thirteen() {
        for hour in ["0", "13"] {
            let submission = form(
                "Alice",
                ("2024-01-08", hour, "0", "AM"),
                ("2024-01-08", "5", "0", "PM"),
            );
            let result = parse_entry(&submission);
            assert!(matches!(
                result,
                Err(TimesheetError::UnparseableTime { ref field, .. })
                    if field == "check_in_hour"
            ));
        }
    }

    #[test]
    fn test_rejects_minute_61() {
        let submission = form(
            "Alice",
            ("2024-01-08", "9", "61", "AM"),
            ("2024-01-08", "5", "0", "PM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::UnparseableTime { ref field, .. }) if field == "check_in_minute"
        ));
    }

    #[test]
    fn test_rejects_non_numeric_components() {
        let submission = form(
            "Alice",
            ("2024-01-08", "nine", "0", "AM"),
            ("2024-01-08", "5", "0", "PM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::UnparseableTime { ref field, ref value })
                if field == "check_in_hour" && value == "nine"
        ));
    }

    #[test]
    fn test_rejects_unknown_meridiem() {
        let submission = form(
            "Alice",
            ("2024-01-08", "9", "0", "noon"),
            ("2024-01-08", "5", "0", "PM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::UnparseableTime { ref field, ref value })
                if field == "check_in_meridiem" && value == "noon"
        ));
    }

    #[test]
    fn test_check_in_errors_win_over_check_out_errors() {
        let submission = form(
            "Alice",
            ("2024-01-08", "99", "0", "AM"),
            ("not-a-date", "5", "0", "PM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::UnparseableTime { ref field, .. }) if field == "check_in_hour"
        ));
    }

    // =========================================================================
    // Duration rule
    // =========================================================================

    #[test]
    fn test_rejects_check_out_equal_to_check_in() {
        let submission = form(
            "Alice",
            ("2024-01-08", "9", "0", "AM"),
            ("2024-01-08", "9", "0", "AM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_rejects_check_out_before_check_in() {
        let submission = form(
            "Alice",
            ("2024-01-08", "5", "0", "PM"),
            ("2024-01-08", "9", "0", "AM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_rejects_check_out_on_earlier_date() {
        let submission = form(
            "Alice",
            ("2024-01-09", "9", "0", "AM"),
            ("2024-01-08", "5", "0", "PM"),
        );
        let result = parse_entry(&submission);
        assert!(matches!(
            result,
            Err(TimesheetError::NonPositiveDuration { .. })
        ));
    }
}
