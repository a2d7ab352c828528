//! Attendance-based pro-rata scaling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::to_fixed_3;

/// Attendance figures for scaling a monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProRataInput {
    /// The full monthly amount.
    pub base_amount: Decimal,
    /// Days the employee was present (half days allowed).
    pub present_days: Decimal,
    /// Working days in the payroll period.
    pub total_working_days: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Pay per overtime hour.
    #[serde(default)]
    pub overtime_rate: Decimal,
}

/// Scales a monthly amount by attendance and adds overtime pay.
///
/// Computes `(base_amount / total_working_days) * present_days +
/// overtime_hours * overtime_rate`, rounded to three places. Returns `None`
/// when `total_working_days` is zero or the amount is too large to
/// represent.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::{ProRataInput, calculate_pro_rata_amount};
/// use rust_decimal::Decimal;
///
/// let input = ProRataInput {
///     base_amount: Decimal::from(30_000),
///     present_days: Decimal::from(20),
///     total_working_days: Decimal::from(26),
///     overtime_hours: Decimal::from(5),
///     overtime_rate: Decimal::from(100),
/// };
///
/// let amount = calculate_pro_rata_amount(&input).unwrap();
/// assert_eq!(amount.to_string(), "23576.923");
/// ```
pub fn calculate_pro_rata_amount(input: &ProRataInput) -> Option<Decimal> {
    if input.total_working_days.is_zero() {
        warn!(
            base_amount = %input.base_amount,
            present_days = %input.present_days,
            "Pro-rata requested with zero working days"
        );
        return None;
    }

    let amount = input
        .base_amount
        .checked_div(input.total_working_days)
        .and_then(|per_day| per_day.checked_mul(input.present_days))
        .and_then(|attended| {
            input
                .overtime_hours
                .checked_mul(input.overtime_rate)
                .and_then(|overtime| attended.checked_add(overtime))
        });

    if amount.is_none() {
        warn!(
            base_amount = %input.base_amount,
            present_days = %input.present_days,
            overtime_hours = %input.overtime_hours,
            "Pro-rata amount overflows"
        );
    }

    amount.map(to_fixed_3)
}
