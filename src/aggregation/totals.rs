//! Per-employee total minutes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimeEntry;

/// Total worked minutes for one employee.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::aggregation::EmployeeTotal;
///
/// let total = EmployeeTotal {
///     employee: "Alice".to_string(),
///     minutes: Decimal::from(480),
/// };
/// assert_eq!(total.employee, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTotal {
    /// The employee the total belongs to.
    pub employee: String,
    /// Total worked minutes across all of the employee's entries.
    pub minutes: Decimal,
}

/// Sums worked minutes per employee across the given entries.
///
/// Employees appear in the order their first entry appears, and names
/// are compared exactly, so `alice` and `Alice` are different employees.
/// The calculation never fails; no entries means no rows.
pub fn total_minutes(entries: &[TimeEntry]) -> Vec<EmployeeTotal> {
    let mut totals: Vec<EmployeeTotal> = Vec::new();

    for entry in entries {
        match totals
            .iter_mut()
            .find(|total| total.employee == entry.employee_name())
        {
            Some(total) => total.minutes += entry.minutes_worked(),
            None => totals.push(EmployeeTotal {
                employee: entry.employee_name().to_string(),
                minutes: entry.minutes_worked(),
            }),
        }
    }

    totals
}
