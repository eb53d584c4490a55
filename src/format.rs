//! Duration formatting for worked-minute totals.
//!
//! Every duration the engine displays, from a single entry's daily hours
//! to a biweekly total, goes through [`format_duration`] so the same
//! `H:MM` rendering appears everywhere.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a worked-minute total as `H:MM`.
///
/// Whole hours are floored out of the total and the leftover minutes are
/// rounded half away from zero to the nearest whole minute. When the
/// leftover rounds up to a full hour it carries, so the minute part is
/// always `00` through `59`. Totals are expected to be non-negative; the
/// hour part has no upper bound.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::format::format_duration;
///
/// assert_eq!(format_duration(Decimal::from(90)), "1:30");
/// assert_eq!(format_duration(Decimal::from(45)), "0:45");
/// assert_eq!(format_duration(Decimal::new(1254, 1)), "2:05"); // 125.4 minutes
/// assert_eq!(format_duration(Decimal::new(1196, 1)), "2:00"); // 119.6 minutes
/// ```
pub fn format_duration(total_minutes: Decimal) -> String {
    let sixty = Decimal::from(60);

    let mut hours = (total_minutes / sixty).floor();
    let mut minutes =
        (total_minutes % sixty).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // 59.5 and up rounds to a full hour and carries
    if minutes == sixty {
        hours += Decimal::ONE;
        minutes = Decimal::ZERO;
    }

    let hours = hours.normalize();
    let minutes = minutes.normalize();
    if minutes < Decimal::from(10) {
        format!("{}:0{}", hours, minutes)
    } else {
        format!("{}:{}", hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_minutes() {
        assert_eq!(format_duration(dec("0")), "0:00");
    }

    #[test]
    fn test_under_one_hour() {
        assert_eq!(format_duration(dec("45")), "0:45");
    }

    #[test]
    fn test_exact_hours() {
        assert_eq!(format_duration(dec("60")), "1:00");
        assert_eq!(format_duration(dec("480")), "8:00");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_duration(dec("90")), "1:30");
        assert_eq!(format_duration(dec("1439")), "23:59");
    }

    #[test]
    fn test_single_digit_minutes_are_padded() {
        assert_eq!(format_duration(dec("9")), "0:09");
        assert_eq!(format_duration(dec("125")), "2:05");
    }

    #[test]
    fn test_fractional_minutes_round_to_nearest() {
        assert_eq!(format_duration(dec("125.4")), "2:05");
        assert_eq!(format_duration(dec("125.5")), "2:06");
        assert_eq!(format_duration(dec("59.4")), "0:59");
    }

    #[test]
    fn test_rounded_up_minutes_carry_into_the_hour() {
        assert_eq!(format_duration(dec("59.5")), "1:00");
        assert_eq!(format_duration(dec("119.6")), "2:00");
        assert_eq!(format_duration(dec("179.9")), "3:00");
    }

    #[test]
    fn test_totals_beyond_a_day() {
        assert_eq!(format_duration(dec("1440")), "24:00");
        assert_eq!(format_duration(dec("6000")), "100:00");
    }
}
