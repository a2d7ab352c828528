//! Template composition.
//!
//! Runs every payment field and statutory rule of one payment template
//! through its builder, feeding payment field values into the statutory
//! wage bases, and records how each line was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{
    ESI_MAX_LIMIT, get_bonus_component_from_field, get_epf_component_from_field,
    get_esi_component_from_field, get_gross_value, get_lwf_component_from_field,
    get_pt_component_from_field, get_selected_payment_component_from_field, get_value_for_epf,
    get_value_for_esi,
};
use crate::models::{
    AuditTrace, ComponentType, PaymentFieldDefinition, StatutoryRuleSet, TargetKind,
    TemplateComponent, WageContributions,
};

/// Everything needed to compute the components of one payment template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInputs {
    /// The employee's monthly cost to company.
    pub monthly_ctc: Decimal,
    /// Payment fields selected for the template, in display order.
    #[serde(default)]
    pub payment_fields: Vec<PaymentFieldDefinition>,
    /// Statutory rules enabled for the template.
    #[serde(default)]
    pub statutory: StatutoryRuleSet,
    /// Unsaved edits made in the current session.
    #[serde(default)]
    pub prioritized: Vec<TemplateComponent>,
    /// Components persisted when the template was last saved.
    #[serde(default)]
    pub existing: Vec<TemplateComponent>,
}

/// The computed components of a template and how they were derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSet {
    /// Payment field components followed by statutory components.
    pub components: Vec<TemplateComponent>,
    /// One audit step per component.
    pub audit_trace: AuditTrace,
}

impl ComponentSet {
    /// Returns the first component computed from a rule of `kind`.
    pub fn component(&self, kind: TargetKind) -> Option<&TemplateComponent> {
        self.components.iter().find(|c| c.target.kind() == kind)
    }

    /// Returns the component computed from a payment field.
    pub fn payment_field_component(&self, payment_field_id: Uuid) -> Option<&TemplateComponent> {
        self.components
            .iter()
            .find(|c| c.target.payment_field_id() == Some(payment_field_id))
    }

    /// Returns earnings minus deductions over all components.
    pub fn net_amount(&self) -> Decimal {
        self.components
            .iter()
            .map(TemplateComponent::signed_value)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

fn find_payment_field(components: &[TemplateComponent], id: Uuid) -> Option<&TemplateComponent> {
    components
        .iter()
        .find(|c| c.target.payment_field_id() == Some(id))
}

fn find_statutory(components: &[TemplateComponent], kind: TargetKind) -> Option<&TemplateComponent> {
    components.iter().find(|c| c.target.kind() == kind)
}

fn value_json(value: Option<Decimal>) -> serde_json::Value {
    match value {
        Some(value) => json!(value.to_string()),
        None => serde_json::Value::Null,
    }
}

fn value_text(value: Option<Decimal>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "no value".to_string())
}

/// Computes every component of a payment template.
///
/// Payment fields are built first, in order. Earning values then feed the
/// statutory wage bases: fields flagged `consider_for_epf` feed EPF (and the
/// statutory bonus), fields flagged `consider_for_esi` feed ESI, and all
/// earnings feed the professional tax gross. Inapplicable rules produce no
/// component.
///
/// # Examples
///
/// ```
/// use payroll_components::models::{CalculationType, PaymentFieldDefinition, PaymentType};
/// use payroll_components::template::{TemplateInputs, compose_template_components};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let inputs = TemplateInputs {
///     monthly_ctc: Decimal::from(40_000),
///     payment_fields: vec![PaymentFieldDefinition {
///         id: Uuid::from_u128(1),
///         name: "Basic".to_string(),
///         payment_type: PaymentType::Fixed,
///         calculation_type: CalculationType::PercentageOfCtc,
///         amount: Some(Decimal::from(50)),
///         component_type: None,
///         consider_for_epf: true,
///         consider_for_esi: false,
///         is_pro_rata: true,
///     }],
///     ..Default::default()
/// };
///
/// let set = compose_template_components(&inputs);
/// assert_eq!(set.components.len(), 1);
/// assert_eq!(set.net_amount(), Decimal::from(20_000));
/// ```
pub fn compose_template_components(inputs: &TemplateInputs) -> ComponentSet {
    let mut set = ComponentSet::default();
    let mut epf_values = WageContributions::new();
    let mut esi_values = WageContributions::new();
    let mut gross_values = WageContributions::new();

    for field in &inputs.payment_fields {
        let prioritized = find_payment_field(&inputs.prioritized, field.id);
        let existing = find_payment_field(&inputs.existing, field.id);

        let Some(component) = get_selected_payment_component_from_field(
            Some(field),
            inputs.monthly_ctc,
            prioritized,
            existing,
        ) else {
            continue;
        };

        if component.component_type == ComponentType::Earning {
            if let Some(value) = component.calculation_value {
                gross_values.insert(field.id, value);
                if field.consider_for_epf {
                    epf_values.insert(field.id, value);
                }
                if field.consider_for_esi {
                    esi_values.insert(field.id, value);
                }
            }
        }

        set.audit_trace.record(
            "payment_field",
            &field.name,
            json!({
                "payment_field_id": field.id.to_string(),
                "payment_type": field.payment_type,
                "calculation_type": field.calculation_type,
                "amount": value_json(field.amount),
                "monthly_ctc": inputs.monthly_ctc.to_string(),
                "is_pro_rata": field.is_pro_rata,
                "has_draft": prioritized.is_some(),
            }),
            json!({ "calculation_value": value_json(component.calculation_value) }),
            format!("{} resolved to {}", field.name, value_text(component.calculation_value)),
        );
        set.components.push(component);
    }

    let rules = &inputs.statutory;

    let epf_base = get_value_for_epf(rules.epf.as_ref(), &epf_values);
    if let Some(component) = get_epf_component_from_field(
        rules.epf.as_ref(),
        epf_base,
        find_statutory(&inputs.existing, TargetKind::Epf),
    ) {
        let restricted = rules
            .epf
            .as_ref()
            .is_some_and(|epf| epf.restrict_employee_contribution);
        set.audit_trace.record(
            "epf",
            "Employees' Provident Fund",
            json!({
                "wage_base": epf_base.to_string(),
                "restricted": restricted,
                "contributing_fields": epf_values.len(),
            }),
            json!({ "calculation_value": value_json(component.calculation_value) }),
            format!(
                "PF wage base {} gives deduction {}",
                epf_base,
                value_text(component.calculation_value)
            ),
        );
        set.components.push(component);
    }

    let esi_base = get_value_for_esi(rules.esi.as_ref(), &esi_values);
    if let Some(component) = get_esi_component_from_field(
        rules.esi.as_ref(),
        esi_base,
        find_statutory(&inputs.existing, TargetKind::Esi),
    ) {
        let esi_wages = get_gross_value(&esi_values);
        let max_limit = rules
            .esi
            .as_ref()
            .and_then(|esi| esi.max_limit)
            .unwrap_or(ESI_MAX_LIMIT);
        let reasoning = if esi_wages > max_limit {
            "ESI wages exceed the ceiling; employee is not covered".to_string()
        } else {
            format!(
                "ESI wage base {} gives deduction {}",
                esi_base,
                value_text(component.calculation_value)
            )
        };
        set.audit_trace.record(
            "esi",
            "Employee State Insurance",
            json!({
                "wage_base": esi_base.to_string(),
                "contributing_fields": esi_values.len(),
            }),
            json!({ "calculation_value": value_json(component.calculation_value) }),
            reasoning,
        );
        set.components.push(component);
    }

    let gross = get_gross_value(&gross_values);
    if let Some(component) = get_pt_component_from_field(
        rules.pt.as_ref(),
        gross,
        find_statutory(&inputs.existing, TargetKind::Pt),
    ) {
        let state = rules.pt.as_ref().map(|pt| pt.state.as_str()).unwrap_or_default();
        set.audit_trace.record(
            "pt",
            "Professional Tax",
            json!({ "gross": gross.to_string(), "state": state }),
            json!({ "calculation_value": value_json(component.calculation_value) }),
            format!(
                "Gross {} in {} pays {}",
                gross,
                state,
                value_text(component.calculation_value)
            ),
        );
        set.components.push(component);
    }

    if let Some(component) = get_lwf_component_from_field(
        rules.lwf.as_ref(),
        find_statutory(&inputs.existing, TargetKind::Lwf),
    ) {
        let cycle = rules
            .lwf
            .as_ref()
            .and_then(|lwf| lwf.deduction_cycle)
            .map(|cycle| cycle.to_string());
        set.audit_trace.record(
            "lwf",
            "Labour Welfare Fund",
            json!({
                "employee_contribution": rules.lwf.as_ref().map(|lwf| lwf.employee_contribution.to_string()),
                "deduction_cycle": cycle,
            }),
            json!({ "calculation_value": value_json(component.calculation_value) }),
            format!(
                "Flat contribution spread over a {} cycle gives {}",
                cycle.as_deref().unwrap_or("missing"),
                value_text(component.calculation_value)
            ),
        );
        set.components.push(component);
    }

    let bonus_base = get_gross_value(&epf_values);
    if let Some(component) = get_bonus_component_from_field(
        rules.bonus.as_ref(),
        bonus_base,
        find_statutory(&inputs.existing, TargetKind::Bonus),
    ) {
        set.audit_trace.record(
            "bonus",
            "Statutory Bonus",
            json!({
                "wage_base": bonus_base.to_string(),
                "percentage": value_json(rules.bonus.as_ref().and_then(|b| b.percentage)),
            }),
            json!({ "calculation_value": value_json(component.calculation_value) }),
            format!(
                "Bonus on wage base {} is {}",
                bonus_base,
                value_text(component.calculation_value)
            ),
        );
        set.components.push(component);
    }

    debug!(
        payment_fields = inputs.payment_fields.len(),
        components = set.components.len(),
        net_amount = %set.net_amount(),
        "Composed template components"
    );

    set
}
