//! Statutory rule rows.
//!
//! Each Indian statutory contribution a company can enable is configured by
//! one row: EPF, ESI, Professional Tax, Labour Welfare Fund and the
//! statutory bonus. Rows are plain data; the calculation modules decide how
//! they turn into template components.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Employees' Provident Fund configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpfRule {
    /// Unique identifier of the rule.
    pub id: Uuid,
    /// The establishment's EPF registration number.
    #[serde(default)]
    pub epf_number: Option<String>,
    /// Employee contribution rate as a fraction (e.g. 0.12).
    #[serde(default)]
    pub employee_contribution: Option<Decimal>,
    /// Whether the EPF wage base is capped at `employee_restrict_value`.
    #[serde(default)]
    pub restrict_employee_contribution: bool,
    /// The wage base cap used when contributions are restricted.
    #[serde(default)]
    pub employee_restrict_value: Option<Decimal>,
}

/// Employee State Insurance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsiRule {
    /// Unique identifier of the rule.
    pub id: Uuid,
    /// The employer's ESI code.
    #[serde(default)]
    pub esi_number: Option<String>,
    /// Employee contribution rate as a fraction (e.g. 0.0075).
    #[serde(default)]
    pub employee_contribution: Option<Decimal>,
    /// Monthly wage ceiling above which ESI does not apply.
    #[serde(default)]
    pub max_limit: Option<Decimal>,
}

/// One professional tax slab.
///
/// Both ends are inclusive. An `end` of `None` means the slab is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBracket {
    /// Lowest gross salary in the slab.
    pub start: Decimal,
    /// Highest gross salary in the slab, if bounded.
    #[serde(default)]
    pub end: Option<Decimal>,
    /// Monthly tax for the slab.
    pub value: Decimal,
}

impl SalaryBracket {
    /// Returns true if `gross` falls within this slab.
    pub fn contains(&self, gross: Decimal) -> bool {
        self.start <= gross && self.end.is_none_or(|end| gross <= end)
    }

    /// Parses a bracket table stored as a JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_components::models::SalaryBracket;
    ///
    /// let table = SalaryBracket::parse_table(
    ///     r#"[{"start": 0, "end": 7500, "value": 0}, {"start": 7501, "end": null, "value": 200}]"#,
    /// ).unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert!(table[1].end.is_none());
    /// ```
    pub fn parse_table(raw: &str) -> EngineResult<Vec<SalaryBracket>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(trimmed).map_err(|e| EngineError::InvalidBracketTable {
            message: e.to_string(),
        })
    }
}

/// Professional Tax configuration for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalTaxRule {
    /// Unique identifier of the rule.
    pub id: Uuid,
    /// The Indian state this rule applies to.
    #[serde(default)]
    pub state: String,
    /// Slabs in evaluation order.
    ///
    /// Accepts either a list of slabs or a string holding a JSON list.
    #[serde(default, deserialize_with = "deserialize_bracket_table")]
    pub gross_salary_range: Vec<SalaryBracket>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBracketTable {
    Parsed(Vec<SalaryBracket>),
    Serialized(String),
}

fn deserialize_bracket_table<'de, D>(deserializer: D) -> Result<Vec<SalaryBracket>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawBracketTable>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(RawBracketTable::Parsed(brackets)) => Ok(brackets),
        Some(RawBracketTable::Serialized(raw)) => {
            SalaryBracket::parse_table(&raw).map_err(serde::de::Error::custom)
        }
    }
}

/// How often a Labour Welfare Fund contribution is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCycle {
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    HalfYearly,
    /// Once a year.
    Yearly,
    /// A cycle this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl DeductionCycle {
    /// Returns the number of months in the cycle, if known.
    pub fn months(&self) -> Option<u32> {
        match self {
            DeductionCycle::Monthly => Some(1),
            DeductionCycle::Quarterly => Some(3),
            DeductionCycle::HalfYearly => Some(6),
            DeductionCycle::Yearly => Some(12),
            DeductionCycle::Unknown => None,
        }
    }
}

impl fmt::Display for DeductionCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeductionCycle::Monthly => "monthly",
            DeductionCycle::Quarterly => "quarterly",
            DeductionCycle::HalfYearly => "half_yearly",
            DeductionCycle::Yearly => "yearly",
            DeductionCycle::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Labour Welfare Fund configuration for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourWelfareFundRule {
    /// Unique identifier of the rule.
    pub id: Uuid,
    /// The Indian state this rule applies to.
    #[serde(default)]
    pub state: String,
    /// Flat employee contribution per deduction cycle.
    pub employee_contribution: Decimal,
    /// Flat employer contribution per deduction cycle.
    #[serde(default)]
    pub employer_contribution: Option<Decimal>,
    /// How often the contribution is collected.
    #[serde(default)]
    pub deduction_cycle: Option<DeductionCycle>,
}

/// Statutory bonus configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryBonusRule {
    /// Unique identifier of the rule.
    pub id: Uuid,
    /// Bonus as a percentage of the wage base (e.g. 8.33).
    #[serde(default)]
    pub percentage: Option<Decimal>,
    /// How often the bonus is paid out (e.g. "monthly", "yearly").
    #[serde(default)]
    pub payment_frequency: Option<String>,
}

/// The statutory rules enabled for one template.
///
/// Any rule may be absent, in which case no component is produced for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRuleSet {
    /// EPF rule, if enabled.
    #[serde(default)]
    pub epf: Option<EpfRule>,
    /// ESI rule, if enabled.
    #[serde(default)]
    pub esi: Option<EsiRule>,
    /// Professional tax rule, if enabled.
    #[serde(default)]
    pub pt: Option<ProfessionalTaxRule>,
    /// Labour welfare fund rule, if enabled.
    #[serde(default)]
    pub lwf: Option<LabourWelfareFundRule>,
    /// Statutory bonus rule, if enabled.
    #[serde(default)]
    pub bonus: Option<StatutoryBonusRule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bracket_contains_is_inclusive() {
        let bracket = SalaryBracket {
            start: dec("10001"),
            end: Some(dec("20000")),
            value: dec("150"),
        };
        assert!(bracket.contains(dec("10001")));
        assert!(bracket.contains(dec("20000")));
        assert!(!bracket.contains(dec("20000.01")));
        assert!(!bracket.contains(dec("10000")));
    }

    #[test]
    fn test_open_ended_bracket_contains_everything_above_start() {
        let bracket = SalaryBracket {
            start: dec("20001"),
            end: None,
            value: dec("200"),
        };
        assert!(bracket.contains(dec("9999999")));
        assert!(!bracket.contains(dec("20000")));
    }

    #[test]
    fn test_pt_rule_accepts_bracket_list() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000010",
            "state": "Karnataka",
            "gross_salary_range": [
                {"start": "0", "end": "24999", "value": "0"},
                {"start": "25000", "end": null, "value": "200"}
            ]
        }"#;

        let rule: ProfessionalTaxRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.gross_salary_range.len(), 2);
        assert_eq!(rule.gross_salary_range[1].value, dec("200"));
    }

    #[test]
    fn test_pt_rule_parses_serialized_bracket_string() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000010",
            "state": "Maharashtra",
            "gross_salary_range": "[{\"start\": 0, \"end\": 7500, \"value\": 0}, {\"start\": 7501, \"end\": 10000, \"value\": 175}]"
        }"#;

        let rule: ProfessionalTaxRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.gross_salary_range.len(), 2);
        assert_eq!(rule.gross_salary_range[1].start, dec("7501"));
        assert_eq!(rule.gross_salary_range[1].value, dec("175"));
    }

    #[test]
    fn test_pt_rule_with_null_or_missing_brackets_is_empty() {
        let json = r#"{"id": "00000000-0000-0000-0000-000000000010", "gross_salary_range": null}"#;
        let rule: ProfessionalTaxRule = serde_json::from_str(json).unwrap();
        assert!(rule.gross_salary_range.is_empty());

        let json = r#"{"id": "00000000-0000-0000-0000-000000000010"}"#;
        let rule: ProfessionalTaxRule = serde_json::from_str(json).unwrap();
        assert!(rule.gross_salary_range.is_empty());
    }

    #[test]
    fn test_pt_rule_rejects_malformed_bracket_string() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000010",
            "gross_salary_range": "[{\"start\": 0"
        }"#;

        let result: Result<ProfessionalTaxRule, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid gross salary range"));
    }

    #[test]
    fn test_parse_table_of_blank_string_is_empty() {
        assert!(SalaryBracket::parse_table("  ").unwrap().is_empty());
    }

    #[test]
    fn test_deduction_cycle_months() {
        assert_eq!(DeductionCycle::Monthly.months(), Some(1));
        assert_eq!(DeductionCycle::Quarterly.months(), Some(3));
        assert_eq!(DeductionCycle::HalfYearly.months(), Some(6));
        assert_eq!(DeductionCycle::Yearly.months(), Some(12));
        assert_eq!(DeductionCycle::Unknown.months(), None);
    }

    #[test]
    fn test_unknown_deduction_cycle_deserializes() {
        let cycle: DeductionCycle = serde_json::from_str(r#""fortnightly""#).unwrap();
        assert_eq!(cycle, DeductionCycle::Unknown);

        let cycle: DeductionCycle = serde_json::from_str(r#""half_yearly""#).unwrap();
        assert_eq!(cycle, DeductionCycle::HalfYearly);
        assert_eq!(cycle.to_string(), "half_yearly");
    }
}
