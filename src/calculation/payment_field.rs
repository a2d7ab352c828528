//! Generic payment field components.
//!
//! Builds the template component for a company payment field, merging the
//! freshly computed value with an in-progress draft and the persisted
//! component it supersedes.

use rust_decimal::Decimal;

use crate::models::{
    CalculationType, ComponentTarget, ComponentType, PaymentFieldDefinition, TemplateComponent,
};

use super::to_fixed_3;

/// Computes the monthly value of a payment field, if it can be derived.
///
/// Only fixed payment fields have a template value. A fixed calculation uses
/// `amount` as-is; a CTC percentage takes `amount` percent of `monthly_ctc`.
/// Missing amounts, unknown calculation types and values too large to
/// represent yield `None`.
pub fn payment_field_value(field: &PaymentFieldDefinition, monthly_ctc: Decimal) -> Option<Decimal> {
    if !field.is_fixed() {
        return None;
    }

    match field.calculation_type {
        CalculationType::Fixed => field.amount,
        CalculationType::PercentageOfCtc => field
            .amount
            .and_then(|percentage| percentage.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|share| share.checked_mul(monthly_ctc)),
        CalculationType::Other => None,
    }
}

/// Builds the template component for a payment field.
///
/// Returns `None` when `field` is `None`.
///
/// Identifying values are resolved draft first, then from the field itself,
/// then from the persisted component:
/// - `id` and `template_id`: `prioritized`, then `existing`
/// - `payment_field_id`: `prioritized`, then `field.id`
/// - `component_type`: `prioritized`, then `field.component_type`, then
///   `existing`, defaulting to an earning
///
/// The `calculation_value` is the computed value rounded to three places,
/// falling back to the draft's value and then the persisted value when
/// nothing can be computed.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_selected_payment_component_from_field;
/// use payroll_components::models::{CalculationType, PaymentFieldDefinition, PaymentType};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let hra = PaymentFieldDefinition {
///     id: Uuid::nil(),
///     name: "HRA".to_string(),
///     payment_type: PaymentType::Fixed,
///     calculation_type: CalculationType::PercentageOfCtc,
///     amount: Some(Decimal::from(20)),
///     component_type: None,
///     consider_for_epf: false,
///     consider_for_esi: true,
///     is_pro_rata: true,
/// };
///
/// let component =
///     get_selected_payment_component_from_field(Some(&hra), Decimal::from(50_000), None, None)
///         .unwrap();
/// assert_eq!(component.calculation_value.unwrap().to_string(), "10000.000");
/// ```
pub fn get_selected_payment_component_from_field(
    field: Option<&PaymentFieldDefinition>,
    monthly_ctc: Decimal,
    prioritized: Option<&TemplateComponent>,
    existing: Option<&TemplateComponent>,
) -> Option<TemplateComponent> {
    let field = field?;

    let value = payment_field_value(field, monthly_ctc).map(to_fixed_3);

    let payment_field_id = prioritized
        .and_then(|c| c.target.payment_field_id())
        .unwrap_or(field.id);

    let component_type = prioritized
        .map(|c| c.component_type)
        .or(field.component_type)
        .or(existing.map(|c| c.component_type))
        .unwrap_or(ComponentType::Earning);

    Some(TemplateComponent {
        id: prioritized.and_then(|c| c.id).or(existing.and_then(|c| c.id)),
        template_id: prioritized
            .and_then(|c| c.template_id)
            .or(existing.and_then(|c| c.template_id)),
        target: ComponentTarget::PaymentField { payment_field_id },
        component_type,
        calculation_value: value
            .or(prioritized.and_then(|c| c.calculation_value))
            .or(existing.and_then(|c| c.calculation_value)),
    })
}
