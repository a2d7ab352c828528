//! Salary entry models.
//!
//! Once payroll has been run, each employee carries a list of
//! [`SalaryEntry`] lines whose amounts add up to net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a salary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Adds to net pay.
    Earning,
    /// Subtracts from net pay.
    Deduction,
    /// Any other tag (e.g. an informational employer contribution).
    #[serde(other)]
    Other,
}

/// One computed salary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    /// The name of the field or rule the line came from.
    #[serde(default)]
    pub field_name: String,
    /// Earning, deduction, or something else.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// The amount of the line.
    pub amount: Decimal,
}

/// An employee's salary lines for one payroll run.
///
/// # Example
///
/// ```
/// use payroll_components::models::{EmployeeSalary, EntryType, SalaryEntry};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let salary = EmployeeSalary {
///     employee_id: Uuid::nil(),
///     salary_entries: vec![SalaryEntry {
///         field_name: "Basic".to_string(),
///         entry_type: EntryType::Earning,
///         amount: Decimal::new(15000, 0),
///     }],
/// };
/// assert_eq!(salary.salary_entries.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalary {
    /// The employee the lines belong to.
    pub employee_id: Uuid,
    /// Salary lines in display order.
    #[serde(default)]
    pub salary_entries: Vec<SalaryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_entry_uses_type_key() {
        let json = r#"{"field_name": "EPF", "type": "deduction", "amount": "1800.000"}"#;
        let entry: SalaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Deduction);
        assert_eq!(entry.amount, Decimal::from_str("1800").unwrap());
    }

    #[test]
    fn test_unrecognised_entry_type_is_other() {
        let json = r#"{"type": "employer_contribution", "amount": "500"}"#;
        let entry: SalaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Other);
        assert_eq!(entry.field_name, "");
    }
}
