//! Employee State Insurance component calculation.

use rust_decimal::Decimal;

use crate::models::{ComponentTarget, ComponentType, EsiRule, TemplateComponent};

use super::to_fixed_3;

/// Employee ESI contribution rate used when the rule does not set one (0.75%).
pub const ESI_EMPLOYEE_CONTRIBUTION: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

/// Monthly gross wage above which ESI no longer applies.
pub const ESI_MAX_LIMIT: Decimal = Decimal::from_parts(21000, 0, 0, false, 0);

/// Builds the ESI deduction component for an ESI wage base.
///
/// Same shape as the EPF component, with [`ESI_EMPLOYEE_CONTRIBUTION`] as
/// the default rate. Returns `None` when `field` is `None`.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_esi_component_from_field;
/// use payroll_components::models::EsiRule;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let esi = EsiRule {
///     id: Uuid::nil(),
///     esi_number: None,
///     employee_contribution: None,
///     max_limit: None,
/// };
///
/// let component = get_esi_component_from_field(Some(&esi), Decimal::from(15_000), None).unwrap();
/// assert_eq!(component.calculation_value.unwrap().to_string(), "112.500");
/// ```
pub fn get_esi_component_from_field(
    field: Option<&EsiRule>,
    value: Decimal,
    existing: Option<&TemplateComponent>,
) -> Option<TemplateComponent> {
    let field = field?;
    let rate = field
        .employee_contribution
        .unwrap_or(ESI_EMPLOYEE_CONTRIBUTION);

    Some(TemplateComponent {
        id: existing.and_then(|c| c.id),
        template_id: existing.and_then(|c| c.template_id),
        target: ComponentTarget::Esi { esi_id: field.id },
        component_type: ComponentType::Deduction,
        calculation_value: value
            .checked_mul(rate)
            .map(to_fixed_3)
            .or(existing.and_then(|c| c.calculation_value)),
    })
}
