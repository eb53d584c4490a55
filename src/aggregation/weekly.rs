//! Per-employee weekly minutes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::week::week_start_of;
use crate::models::TimeEntry;

/// Per-week worked minutes for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWeekly {
    /// The employee the breakdown belongs to.
    pub employee: String,
    /// Worked minutes keyed by week start (a Monday), in ascending order.
    pub weeks: BTreeMap<NaiveDate, Decimal>,
}

/// Buckets worked minutes per employee per week.
///
/// A week runs Monday through Sunday and is keyed by its Monday via
/// [`week_start_of`]. An entry lands in the week of its check-in date,
/// so an overnight entry that crosses into a new week still counts
/// entirely toward the week it started in. Employees appear in
/// first-seen order; within an employee the weeks are ascending.
pub fn weekly_minutes(entries: &[TimeEntry]) -> Vec<EmployeeWeekly> {
    let mut rows: Vec<EmployeeWeekly> = Vec::new();

    for entry in entries {
        let week = week_start_of(entry.check_in_date());
        let index = match rows
            .iter()
            .position(|row| row.employee == entry.employee_name())
        {
            Some(index) => index,
            None => {
                rows.push(EmployeeWeekly {
                    employee: entry.employee_name().to_string(),
                    weeks: BTreeMap::new(),
                });
                rows.len() - 1
            }
        };
        *rows[index].weeks.entry(week).or_insert(Decimal::ZERO) += entry.minutes_worked();
    }

    rows
}
