//! Professional Tax component calculation.
//!
//! Professional tax is levied by state in slabs of gross monthly salary.
//! The slab table comes from the state's [`ProfessionalTaxRule`].

use rust_decimal::Decimal;

use crate::models::{ComponentTarget, ComponentType, ProfessionalTaxRule, TemplateComponent};

use super::to_fixed_3;

/// Finds the tax for a gross salary in a slab table.
///
/// Slabs are scanned in order and the first slab containing `gross` wins.
/// A gross salary outside every slab pays nothing.
pub fn professional_tax_for_gross(rule: &ProfessionalTaxRule, gross: Decimal) -> Decimal {
    rule.gross_salary_range
        .iter()
        .find(|bracket| bracket.contains(gross))
        .map(|bracket| bracket.value)
        .unwrap_or(Decimal::ZERO)
}

/// Builds the professional tax deduction component for a gross salary.
///
/// Returns `None` when `field` is `None` or has no slabs configured. Unlike
/// the EPF and ESI builders, a gross salary that matches no slab produces a
/// `"0.000"` value rather than falling back to `existing`.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_pt_component_from_field;
/// use payroll_components::models::{ProfessionalTaxRule, SalaryBracket};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let pt = ProfessionalTaxRule {
///     id: Uuid::nil(),
///     state: "Karnataka".to_string(),
///     gross_salary_range: vec![
///         SalaryBracket { start: Decimal::ZERO, end: Some(Decimal::from(24_999)), value: Decimal::ZERO },
///         SalaryBracket { start: Decimal::from(25_000), end: None, value: Decimal::from(200) },
///     ],
/// };
///
/// let component = get_pt_component_from_field(Some(&pt), Decimal::from(30_000), None).unwrap();
/// assert_eq!(component.calculation_value.unwrap().to_string(), "200.000");
/// ```
pub fn get_pt_component_from_field(
    field: Option<&ProfessionalTaxRule>,
    value: Decimal,
    existing: Option<&TemplateComponent>,
) -> Option<TemplateComponent> {
    let field = field?;
    if field.gross_salary_range.is_empty() {
        return None;
    }

    Some(TemplateComponent {
        id: existing.and_then(|c| c.id),
        template_id: existing.and_then(|c| c.template_id),
        target: ComponentTarget::Pt { pt_id: field.id },
        component_type: ComponentType::Deduction,
        calculation_value: Some(to_fixed_3(professional_tax_for_gross(field, value))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryBracket;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(start: &str, end: Option<&str>, value: &str) -> SalaryBracket {
        SalaryBracket {
            start: dec(start),
            end: end.map(dec),
            value: dec(value),
        }
    }

    fn create_pt() -> ProfessionalTaxRule {
        ProfessionalTaxRule {
            id: Uuid::from_u128(30),
            state: "Maharashtra".to_string(),
            gross_salary_range: vec![
                bracket("0", Some("10000"), "0"),
                bracket("10001", Some("20000"), "150"),
                bracket("20001", None, "200"),
            ],
        }
    }

    fn pt_value(rule: &ProfessionalTaxRule, gross: &str) -> String {
        get_pt_component_from_field(Some(rule), dec(gross), None)
            .unwrap()
            .calculation_value
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_none_rule_returns_none() {
        assert!(get_pt_component_from_field(None, dec("15000"), None).is_none());
    }

    #[test]
    fn test_empty_slab_table_returns_none() {
        let mut rule = create_pt();
        rule.gross_salary_range.clear();
        assert!(get_pt_component_from_field(Some(&rule), dec("15000"), None).is_none());
    }

    #[test]
    fn test_middle_slab() {
        assert_eq!(pt_value(&create_pt(), "15000"), "150.000");
    }

    #[test]
    fn test_open_ended_top_slab() {
        assert_eq!(pt_value(&create_pt(), "25000"), "200.000");
    }

    #[test]
    fn test_slab_boundaries_are_inclusive() {
        let rule = create_pt();
        assert_eq!(pt_value(&rule, "10000"), "0.000");
        assert_eq!(pt_value(&rule, "10001"), "150.000");
        assert_eq!(pt_value(&rule, "20000"), "150.000");
        assert_eq!(pt_value(&rule, "20001"), "200.000");
    }

    #[test]
    fn test_gross_outside_all_slabs_pays_zero() {
        let rule = create_pt();
        assert_eq!(pt_value(&rule, "-1"), "0.000");
        // Falls in the gap between two bounded slabs.
        assert_eq!(pt_value(&rule, "10000.5"), "0.000");
    }

    #[test]
    fn test_zero_outside_slabs_ignores_existing_value() {
        let rule = create_pt();
        let existing = TemplateComponent {
            id: Some(Uuid::from_u128(1)),
            template_id: Some(Uuid::from_u128(2)),
            target: ComponentTarget::Pt {
                pt_id: Uuid::from_u128(30),
            },
            component_type: ComponentType::Deduction,
            calculation_value: Some(dec("175.000")),
        };
        let component = get_pt_component_from_field(Some(&rule), dec("-5"), Some(&existing)).unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "0.000");
        assert_eq!(component.id, Some(Uuid::from_u128(1)));
    }

    #[test]
    fn test_first_matching_slab_wins_on_overlap() {
        let rule = ProfessionalTaxRule {
            id: Uuid::from_u128(31),
            state: "Test".to_string(),
            gross_salary_range: vec![
                bracket("0", Some("15000"), "100"),
                bracket("10000", Some("20000"), "300"),
            ],
        };
        assert_eq!(pt_value(&rule, "12000"), "100.000");
    }
}
