//! Payroll period and holiday models.
//!
//! A [`PayrollPeriod`] is the attendance window a payroll run covers,
//! together with the company holidays that fall inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company holiday.
///
/// # Example
///
/// ```
/// use payroll_components::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}

/// The date range covered by one payroll run.
///
/// # Example
///
/// ```
/// use payroll_components::models::{Holiday, PayrollPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     holidays: vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///         name: "Republic Day".to_string(),
///     }],
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert!(period.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Company holidays within the period.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl PayrollPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date is one of the period's holidays.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Iterates over every date in the period in order.
    ///
    /// Yields nothing if the end date precedes the start date.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }
}
