//! Employees' Provident Fund component calculation.
//!
//! The employee's EPF deduction is a fixed share of the PF wage base. The
//! wage base itself is assembled by [`get_value_for_epf`](super::get_value_for_epf).

use rust_decimal::Decimal;

use crate::models::{ComponentTarget, ComponentType, EpfRule, TemplateComponent};

use super::to_fixed_3;

/// Employee EPF contribution rate used when the rule does not set one (12%).
pub const DEFAULT_EPF_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// PF wage ceiling used when a restricted rule does not set its own cap.
pub const EPF_RESTRICT_VALUE: Decimal = Decimal::from_parts(15000, 0, 0, false, 0);

/// Builds the EPF deduction component for a PF wage base.
///
/// The value is `value * employee_contribution`, falling back to
/// [`DEFAULT_EPF_RATE`]. Identifiers of `existing` are carried over so the
/// persisted row is updated in place. A product too large to represent
/// keeps the value of `existing`. Returns `None` when `field` is `None`.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_epf_component_from_field;
/// use payroll_components::models::EpfRule;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let epf = EpfRule {
///     id: Uuid::nil(),
///     epf_number: None,
///     employee_contribution: None,
///     restrict_employee_contribution: true,
///     employee_restrict_value: None,
/// };
///
/// let component = get_epf_component_from_field(Some(&epf), Decimal::from(15_000), None).unwrap();
/// assert_eq!(component.calculation_value.unwrap().to_string(), "1800.000");
/// ```
pub fn get_epf_component_from_field(
    field: Option<&EpfRule>,
    value: Decimal,
    existing: Option<&TemplateComponent>,
) -> Option<TemplateComponent> {
    let field = field?;
    let rate = field.employee_contribution.unwrap_or(DEFAULT_EPF_RATE);

    Some(TemplateComponent {
        id: existing.and_then(|c| c.id),
        template_id: existing.and_then(|c| c.template_id),
        target: ComponentTarget::Epf { epf_id: field.id },
        component_type: ComponentType::Deduction,
        calculation_value: value
            .checked_mul(rate)
            .map(to_fixed_3)
            .or(existing.and_then(|c| c.calculation_value)),
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

    fn create_epf(rate: Option<&str>) -> EpfRule {
        EpfRule {
            id: Uuid::from_u128(10),
            epf_number: Some("MH/BAN/0012345/000".to_string()),
            employee_contribution: rate.map(dec),
            restrict_employee_contribution: false,
            employee_restrict_value: None,
        }
    }

    #[test]
    fn test_none_rule_returns_none() {
        assert!(get_epf_component_from_field(None, dec("15000"), None).is_none());
    }

    #[test]
    fn test_overflowing_contribution_keeps_existing_value() {
        let epf = create_epf(Some("2"));
        let existing = TemplateComponent {
            id: Some(Uuid::from_u128(1)),
            template_id: None,
            target: ComponentTarget::Epf {
                epf_id: Uuid::from_u128(10),
            },
            component_type: ComponentType::Deduction,
            calculation_value: Some(dec("1800.000")),
        };

        let component = get_epf_component_from_field(Some(&epf), Decimal::MAX, None).unwrap();
        assert!(component.calculation_value.is_none());

        let component =
            get_epf_component_from_field(Some(&epf), Decimal::MAX, Some(&existing)).unwrap();
        assert_eq!(component.calculation_value, Some(dec("1800.000")));
    }

    #[test]
    fn test_default_rate_is_twelve_percent() {
        assert_eq!(DEFAULT_EPF_RATE, dec("0.12"));
        let epf = create_epf(None);
        let component = get_epf_component_from_field(Some(&epf), dec("20000"), None).unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "2400.000");
    }

    #[test]
    fn test_configured_rate_overrides_default() {
        let epf = create_epf(Some("0.10"));
        let component = get_epf_component_from_field(Some(&epf), dec("12345.67"), None).unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "1234.567");
    }

    #[test]
    fn test_component_is_epf_deduction() {
        let epf = create_epf(None);
        let component = get_epf_component_from_field(Some(&epf), dec("15000"), None).unwrap();
        assert_eq!(component.component_type, ComponentType::Deduction);
        assert_eq!(
            component.target,
            ComponentTarget::Epf {
                epf_id: Uuid::from_u128(10)
            }
        );
    }

    #[test]
    fn test_existing_identifiers_are_preserved() {
        let epf = create_epf(None);
        let existing = TemplateComponent {
            id: Some(Uuid::from_u128(1)),
            template_id: Some(Uuid::from_u128(2)),
            target: ComponentTarget::Epf {
                epf_id: Uuid::from_u128(10),
            },
            component_type: ComponentType::Deduction,
            calculation_value: Some(dec("1500.000")),
        };

        let component =
            get_epf_component_from_field(Some(&epf), dec("15000"), Some(&existing)).unwrap();
        assert_eq!(component.id, Some(Uuid::from_u128(1)));
        assert_eq!(component.template_id, Some(Uuid::from_u128(2)));
        assert_eq!(component.calculation_value.unwrap().to_string(), "1800.000");
    }
}
