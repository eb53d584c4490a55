//! Per-employee biweekly minutes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::weekly::weekly_minutes;
use crate::models::TimeEntry;

/// One fortnight bucket in a biweekly breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiweeklyPeriod {
    /// The week start of the first week in the period.
    pub first_week: NaiveDate,
    /// The week start of the second week, absent for a trailing odd week.
    pub second_week: Option<NaiveDate>,
    /// Worked minutes across the period.
    pub minutes: Decimal,
}

impl BiweeklyPeriod {
    /// Renders the period label from its week starts.
    ///
    /// A full fortnight renders as `2024-01-08 & 2024-01-15`; a trailing
    /// single week renders as just its own week start.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use timesheet_engine::aggregation::BiweeklyPeriod;
    ///
    /// let period = BiweeklyPeriod {
    ///     first_week: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
    ///     second_week: NaiveDate::from_ymd_opt(2024, 1, 15),
    ///     minutes: Decimal::from(960),
    /// };
    /// assert_eq!(period.label(), "2024-01-08 & 2024-01-15");
    /// ```
    pub fn label(&self) -> String {
        match self.second_week {
            Some(second_week) => format!("{} & {}", self.first_week, second_week),
            None => self.first_week.to_string(),
        }
    }
}

/// Per-fortnight worked minutes for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBiweekly {
    /// The employee the breakdown belongs to.
    pub employee: String,
    /// The employee's fortnight buckets in ascending order.
    pub periods: Vec<BiweeklyPeriod>,
}

/// Pairs each employee's weekly buckets into fortnights.
///
/// The employee's weeks are taken in ascending order and paired two at a
/// time; an odd trailing week forms a period on its own. Pairing is
/// positional over the weeks the employee actually worked, so a gap week
/// shifts the pairing rather than producing an empty period. Employees
/// appear in first-seen order, as in [`weekly_minutes`].
pub fn biweekly_minutes(entries: &[TimeEntry]) -> Vec<EmployeeBiweekly> {
    weekly_minutes(entries)
        .into_iter()
        .map(|row| {
            let weeks: Vec<(NaiveDate, Decimal)> = row.weeks.into_iter().collect();
            let periods = weeks
                .chunks(2)
                .map(|pair| {
                    let (first_week, first_minutes) = pair[0];
                    let second = pair.get(1).copied();
                    BiweeklyPeriod {
                        first_week,
                        second_week: second.map(|(week, _)| week),
                        minutes: first_minutes
                            + second.map_or(Decimal::ZERO, |(_, minutes)| minutes),
                    }
                })
                .collect();

            EmployeeBiweekly {
                employee: row.employee,
                periods,
            }
        })
        .collect()
}
