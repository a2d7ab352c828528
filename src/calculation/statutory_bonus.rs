//! Statutory bonus component calculation.

use rust_decimal::Decimal;

use crate::models::{ComponentTarget, ComponentType, StatutoryBonusRule, TemplateComponent};

use super::to_fixed_3;

/// Builds the statutory bonus earning component for a wage base.
///
/// The value is `percentage * value / 100`. A missing or zero percentage,
/// or a product too large to represent, computes nothing, so the persisted
/// value of `existing` is kept. This is
/// the only statutory rule that produces an earning. Returns `None` when
/// `field` is `None`.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_bonus_component_from_field;
/// use payroll_components::models::{ComponentType, StatutoryBonusRule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let bonus = StatutoryBonusRule {
///     id: Uuid::nil(),
///     percentage: Some(Decimal::from_str("8.33").unwrap()),
///     payment_frequency: Some("monthly".to_string()),
/// };
///
/// let component = get_bonus_component_from_field(Some(&bonus), Decimal::from(10_000), None).unwrap();
/// assert_eq!(component.component_type, ComponentType::Earning);
/// assert_eq!(component.calculation_value.unwrap().to_string(), "833.000");
/// ```
pub fn get_bonus_component_from_field(
    field: Option<&StatutoryBonusRule>,
    value: Decimal,
    existing: Option<&TemplateComponent>,
) -> Option<TemplateComponent> {
    let field = field?;

    let computed = field
        .percentage
        .filter(|percentage| !percentage.is_zero())
        .and_then(|percentage| percentage.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|share| share.checked_mul(value))
        .map(to_fixed_3);

    Some(TemplateComponent {
        id: existing.and_then(|c| c.id),
        template_id: existing.and_then(|c| c.template_id),
        target: ComponentTarget::Bonus { bonus_id: field.id },
        component_type: ComponentType::Earning,
        calculation_value: computed.or(existing.and_then(|c| c.calculation_value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_bonus(percentage: Option<&str>) -> StatutoryBonusRule {
        StatutoryBonusRule {
            id: Uuid::from_u128(50),
            percentage: percentage.map(dec),
            payment_frequency: None,
        }
    }

    fn create_existing(value: &str) -> TemplateComponent {
        TemplateComponent {
            id: Some(Uuid::from_u128(1)),
            template_id: Some(Uuid::from_u128(2)),
            target: ComponentTarget::Bonus {
                bonus_id: Uuid::from_u128(50),
            },
            component_type: ComponentType::Earning,
            calculation_value: Some(dec(value)),
        }
    }

    #[test]
    fn test_overflowing_bonus_keeps_existing_value() {
        let bonus = create_bonus(Some("200"));
        let existing = create_existing("750.000");
        let component =
            get_bonus_component_from_field(Some(&bonus), Decimal::MAX, Some(&existing)).unwrap();
        assert_eq!(component.calculation_value, Some(dec("750.000")));
    }

    #[test]
    fn test_none_rule_returns_none() {
        assert!(get_bonus_component_from_field(None, dec("10000"), None).is_none());
    }

    #[test]
    fn test_percentage_of_wage_base() {
        let bonus = create_bonus(Some("20"));
        let component = get_bonus_component_from_field(Some(&bonus), dec("12500"), None).unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "2500.000");
        assert_eq!(component.target.kind().as_str(), "bonus");
    }

    #[test]
    fn test_missing_percentage_keeps_existing_value() {
        let bonus = create_bonus(None);
        let existing = create_existing("640.000");
        let component =
            get_bonus_component_from_field(Some(&bonus), dec("12500"), Some(&existing)).unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "640.000");
        assert_eq!(component.id, Some(Uuid::from_u128(1)));
    }

    #[test]
    fn test_zero_percentage_is_treated_as_missing() {
        let bonus = create_bonus(Some("0"));
        let existing = create_existing("640.000");
        let component =
            get_bonus_component_from_field(Some(&bonus), dec("12500"), Some(&existing)).unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "640.000");
    }

    #[test]
    fn test_missing_percentage_without_existing_has_no_value() {
        let bonus = create_bonus(None);
        let component = get_bonus_component_from_field(Some(&bonus), dec("12500"), None).unwrap();
        assert_eq!(component.calculation_value, None);
    }
}
