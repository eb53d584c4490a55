//! Time accounting engine for employee check-in/check-out timesheets.
//!
//! This crate validates raw timesheet submissions, stores the resulting
//! records in submission order, and computes the total, weekly, and
//! biweekly summaries a timesheet front end displays, along with the row
//! data for an exported hours report.

#![warn(missing_docs)]

pub mod aggregation;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod report;
pub mod session;
pub mod store;
