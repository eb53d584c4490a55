//! Summary calculations over stored time entries.
//!
//! This module contains the pure projections a timesheet front end
//! displays: per-employee totals, weekly breakdowns bucketed by
//! Monday-keyed weeks, and biweekly breakdowns that pair those weeks
//! into fortnights. Every function recomputes from scratch over a slice
//! of validated entries, none of them can fail, and no entries simply
//! means no rows.

mod biweekly;
mod totals;
mod week;
mod weekly;

pub use biweekly::{BiweeklyPeriod, EmployeeBiweekly, biweekly_minutes};
pub use totals::{EmployeeTotal, total_minutes};
pub use week::week_start_of;
pub use weekly::{EmployeeWeekly, weekly_minutes};
