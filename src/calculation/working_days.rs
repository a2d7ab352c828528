//! Working day counting for attendance-based pay.

use chrono::{Datelike, Weekday};

use crate::models::PayrollPeriod;

/// Counts the working days in a payroll period.
///
/// A day is a working day unless it falls on one of `weekly_offs` or is one
/// of the period's holidays. The result feeds `total_working_days` of
/// [`calculate_pro_rata_amount`](super::calculate_pro_rata_amount).
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::count_working_days;
/// use payroll_components::models::{Holiday, PayrollPeriod};
/// use chrono::{NaiveDate, Weekday};
///
/// // January 2026 has four Sundays; Republic Day falls on a Monday.
/// let period = PayrollPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     holidays: vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///         name: "Republic Day".to_string(),
///     }],
/// };
///
/// assert_eq!(count_working_days(&period, &[Weekday::Sun]), 26);
/// ```
pub fn count_working_days(period: &PayrollPeriod, weekly_offs: &[Weekday]) -> u32 {
    period
        .dates()
        .filter(|date| !weekly_offs.contains(&date.weekday()))
        .filter(|date| !period.is_holiday(*date))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holiday;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_period(holidays: Vec<Holiday>) -> PayrollPeriod {
        // February 2026: starts on a Sunday, 28 days, four of each weekday.
        PayrollPeriod {
            start_date: date(2026, 2, 1),
            end_date: date(2026, 2, 28),
            holidays,
        }
    }

    #[test]
    fn test_no_offs_counts_every_day() {
        assert_eq!(count_working_days(&create_period(vec![]), &[]), 28);
    }

    #[test]
    fn test_weekends_off() {
        let period = create_period(vec![]);
        assert_eq!(count_working_days(&period, &[Weekday::Sat, Weekday::Sun]), 20);
    }

    #[test]
    fn test_holiday_on_working_day_is_excluded() {
        let period = create_period(vec![Holiday {
            date: date(2026, 2, 16),
            name: "Maha Shivaratri".to_string(),
        }]);
        assert_eq!(count_working_days(&period, &[Weekday::Sun]), 23);
    }

    #[test]
    fn test_holiday_on_weekly_off_is_not_double_counted() {
        let period = create_period(vec![Holiday {
            date: date(2026, 2, 1),
            name: "Sunday Holiday".to_string(),
        }]);
        assert_eq!(count_working_days(&period, &[Weekday::Sun]), 24);
    }
}
