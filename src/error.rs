//! Error types for the timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating and storing
//! time entries.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the timesheet engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The
/// messages are written to be shown to the person filling in the form.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::TimesheetError;
///
/// let error = TimesheetError::MissingField {
///     field: "employee_name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: employee_name");
/// ```
#[derive(Debug, Error)]
pub enum TimesheetError {
    /// A required form field was empty or contained only whitespace.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the field that was missing.
        field: String,
    },

    /// A date or time component could not be parsed or was out of range.
    #[error("Cannot parse {field} value '{value}'")]
    UnparseableTime {
        /// The name of the field that failed to parse.
        field: String,
        /// The raw value that was rejected.
        value: String,
    },

    /// The check-out instant was not after the check-in instant.
    #[error("Check-out time {check_out} must be after check-in time {check_in}")]
    NonPositiveDuration {
        /// The check-in instant of the rejected entry.
        check_in: NaiveDateTime,
        /// The check-out instant of the rejected entry.
        check_out: NaiveDateTime,
    },

    /// A record index did not refer to a stored entry.
    #[error("Record index {index} out of range for {len} records")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of records in the store at the time.
        len: usize,
    },
}

/// A type alias for Results that return TimesheetError.
pub type TimesheetResult<T> = Result<T, TimesheetError>;
