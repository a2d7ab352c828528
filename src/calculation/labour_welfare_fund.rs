//! Labour Welfare Fund component calculation.
//!
//! LWF is a flat amount collected once per deduction cycle. The template
//! carries its monthly equivalent.

use rust_decimal::Decimal;

use crate::models::{ComponentTarget, ComponentType, LabourWelfareFundRule, TemplateComponent};

use super::to_fixed_3;

/// Spreads the flat LWF contribution over the months of its cycle.
///
/// A missing or unknown cycle yields zero.
pub fn monthly_lwf_contribution(rule: &LabourWelfareFundRule) -> Decimal {
    match rule.deduction_cycle.and_then(|cycle| cycle.months()) {
        Some(months) => rule.employee_contribution / Decimal::from(months),
        None => Decimal::ZERO,
    }
}

/// Builds the LWF deduction component.
///
/// Returns `None` when `field` is `None`.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_lwf_component_from_field;
/// use payroll_components::models::{DeductionCycle, LabourWelfareFundRule};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let lwf = LabourWelfareFundRule {
///     id: Uuid::nil(),
///     state: "Maharashtra".to_string(),
///     employee_contribution: Decimal::from(1200),
///     employer_contribution: None,
///     deduction_cycle: Some(DeductionCycle::Yearly),
/// };
///
/// let component = get_lwf_component_from_field(Some(&lwf), None).unwrap();
/// assert_eq!(component.calculation_value.unwrap().to_string(), "100.000");
/// ```
pub fn get_lwf_component_from_field(
    field: Option<&LabourWelfareFundRule>,
    existing: Option<&TemplateComponent>,
) -> Option<TemplateComponent> {
    let field = field?;

    Some(TemplateComponent {
        id: existing.and_then(|c| c.id),
        template_id: existing.and_then(|c| c.template_id),
        target: ComponentTarget::Lwf { lwf_id: field.id },
        component_type: ComponentType::Deduction,
        calculation_value: Some(to_fixed_3(monthly_lwf_contribution(field))),
    })
}
