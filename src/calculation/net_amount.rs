//! Net pay aggregation over salary entries.

use rust_decimal::Decimal;

use crate::models::{EmployeeSalary, EntryType, SalaryEntry};

fn net_of_entries(entries: &[SalaryEntry]) -> Decimal {
    entries
        .iter()
        .fold(Decimal::ZERO, |net, entry| match entry.entry_type {
            EntryType::Earning => net.saturating_add(entry.amount),
            EntryType::Deduction => net.saturating_sub(entry.amount),
            EntryType::Other => net,
        })
}

/// Returns one employee's net pay: earnings minus deductions.
///
/// Entries tagged neither earning nor deduction are ignored.
pub fn calculate_net_amount_after_entry_created(employee: &EmployeeSalary) -> Decimal {
    net_of_entries(&employee.salary_entries)
}

/// Returns the total net pay across a set of employees.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::calculate_salary_total_net_amount;
/// use payroll_components::models::{EmployeeSalary, EntryType, SalaryEntry};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let entry = |entry_type, amount: i64| SalaryEntry {
///     field_name: String::new(),
///     entry_type,
///     amount: Decimal::from(amount),
/// };
/// let salaries = vec![EmployeeSalary {
///     employee_id: Uuid::nil(),
///     salary_entries: vec![
///         entry(EntryType::Earning, 10_000),
///         entry(EntryType::Deduction, 1_200),
///         entry(EntryType::Deduction, 300),
///     ],
/// }];
///
/// assert_eq!(calculate_salary_total_net_amount(&salaries), Decimal::from(8_500));
/// ```
pub fn calculate_salary_total_net_amount(salaries: &[EmployeeSalary]) -> Decimal {
    salaries
        .iter()
        .map(calculate_net_amount_after_entry_created)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
