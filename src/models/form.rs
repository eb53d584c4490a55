//! Raw entry form model and related types.
//!
//! This module defines the EntryForm struct holding an unvalidated
//! submission exactly as a front end captured it, and the Meridiem enum
//! for the AM/PM half of a 12-hour clock reading.

use serde::{Deserialize, Serialize};

/// Represents the AM/PM half of a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    /// The first half of the day, midnight to 11:59.
    Am,
    /// The second half of the day, noon to 23:59.
    Pm,
}

impl Meridiem {
    /// Parses a meridiem from raw form input.
    ///
    /// Matching ignores surrounding whitespace and case. Anything other
    /// than `AM` or `PM` returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::Meridiem;
    ///
    /// assert_eq!(Meridiem::parse("PM"), Some(Meridiem::Pm));
    /// assert_eq!(Meridiem::parse("  am "), Some(Meridiem::Am));
    /// assert_eq!(Meridiem::parse("noon"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Meridiem> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if trimmed.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    /// Converts a 12-hour clock hour to its 24-hour equivalent.
    ///
    /// `12 AM` maps to hour 0 and `12 PM` stays hour 12; every other PM
    /// hour gains twelve. The caller is expected to pass a clock hour in
    /// the range 1 through 12.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::Meridiem;
    ///
    /// assert_eq!(Meridiem::Am.to_24_hour(12), 0);
    /// assert_eq!(Meridiem::Pm.to_24_hour(12), 12);
    /// assert_eq!(Meridiem::Pm.to_24_hour(5), 17);
    /// assert_eq!(Meridiem::Am.to_24_hour(5), 5);
    /// ```
    pub fn to_24_hour(self, clock_hour: u32) -> u32 {
        match self {
            Meridiem::Pm if clock_hour < 12 => clock_hour + 12,
            Meridiem::Am if clock_hour == 12 => 0,
            _ => clock_hour,
        }
    }
}

/// Represents one timesheet submission exactly as captured by a form.
///
/// Every field is kept as the raw string the front end collected; nothing
/// here is validated. [`crate::parse::parse_entry`] turns a form into a
/// validated [`crate::models::TimeEntry`] or reports the first problem
/// found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryForm {
    /// The employee's name as typed.
    pub employee_name: String,
    /// The check-in date in `YYYY-MM-DD` form.
    pub check_in_date: String,
    /// The check-in clock hour, 1 through 12.
    pub check_in_hour: String,
    /// The check-in minute, 0 through 60.
    pub check_in_minute: String,
    /// The check-in meridiem, `AM` or `PM`.
    pub check_in_meridiem: String,
    /// The check-out date in `YYYY-MM-DD` form.
    pub check_out_date: String,
    /// The check-out clock hour, 1 through 12.
    pub check_out_hour: String,
    /// The check-out minute, 0 through 60.
    pub check_out_minute: String,
    /// The check-out meridiem, `AM` or `PM`.
    pub check_out_meridiem: String,
}
