//! Template editing state.
//!
//! A [`TemplateDraft`] is the in-progress state of one payment template
//! editor. Every edit is a [`TemplateAction`] applied with [`reduce`], which
//! returns a new draft whose components have been recomputed from scratch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    EpfRule, EsiRule, LabourWelfareFundRule, PaymentFieldDefinition, ProfessionalTaxRule,
    StatutoryBonusRule, TemplateComponent,
};

use super::compose::{ComponentSet, TemplateInputs, compose_template_components};

/// A statutory rule enabled on a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rule", rename_all = "snake_case")]
pub enum StatutoryRule {
    /// Employees' Provident Fund.
    Epf(EpfRule),
    /// Employee State Insurance.
    Esi(EsiRule),
    /// Professional Tax.
    Pt(ProfessionalTaxRule),
    /// Labour Welfare Fund.
    Lwf(LabourWelfareFundRule),
    /// Statutory bonus.
    Bonus(StatutoryBonusRule),
}

/// The kind of a statutory rule, used to disable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutoryKind {
    /// Employees' Provident Fund.
    Epf,
    /// Employee State Insurance.
    Esi,
    /// Professional Tax.
    Pt,
    /// Labour Welfare Fund.
    Lwf,
    /// Statutory bonus.
    Bonus,
}

/// An edit made in the template editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum TemplateAction {
    /// Changes the monthly CTC every percentage field is computed from.
    SetMonthlyCtc(Decimal),
    /// Adds a payment field, or replaces the one with the same id.
    UpsertPaymentField(PaymentFieldDefinition),
    /// Removes a payment field together with any draft for it.
    RemovePaymentField(Uuid),
    /// Enables a statutory rule, replacing any rule of the same kind.
    SetStatutoryRule(StatutoryRule),
    /// Disables the statutory rule of a kind.
    ClearStatutoryRule(StatutoryKind),
    /// Records an unsaved edit of a payment field component, replacing any
    /// earlier edit of the same field.
    ///
    /// Statutory components are always recomputed from their rule, so edits
    /// targeting them are ignored.
    PrioritizeComponent(TemplateComponent),
    /// Discards all unsaved component edits.
    ClearPrioritized,
}

/// The state of a template being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    /// Inputs the components are computed from.
    pub inputs: TemplateInputs,
    /// Components computed from `inputs`.
    pub components: ComponentSet,
}

impl TemplateDraft {
    /// Creates a draft and computes its components.
    pub fn new(inputs: TemplateInputs) -> Self {
        let components = compose_template_components(&inputs);
        Self { inputs, components }
    }
}

/// Applies `action` to `draft` and returns the resulting draft.
///
/// The input draft is left untouched.
///
/// # Examples
///
/// ```
/// use payroll_components::template::{TemplateAction, TemplateDraft, reduce};
/// use rust_decimal::Decimal;
///
/// let draft = TemplateDraft::default();
/// let next = reduce(&draft, TemplateAction::SetMonthlyCtc(Decimal::from(30_000)));
///
/// assert_eq!(next.inputs.monthly_ctc, Decimal::from(30_000));
/// assert!(draft.inputs.monthly_ctc.is_zero());
/// ```
pub fn reduce(draft: &TemplateDraft, action: TemplateAction) -> TemplateDraft {
    let mut inputs = draft.inputs.clone();

    match action {
        TemplateAction::SetMonthlyCtc(monthly_ctc) => {
            inputs.monthly_ctc = monthly_ctc;
        }
        TemplateAction::UpsertPaymentField(field) => {
            match inputs.payment_fields.iter_mut().find(|f| f.id == field.id) {
                Some(slot) => *slot = field,
                None => inputs.payment_fields.push(field),
            }
        }
        TemplateAction::RemovePaymentField(id) => {
            inputs.payment_fields.retain(|f| f.id != id);
            inputs
                .prioritized
                .retain(|c| c.target.payment_field_id() != Some(id));
        }
        TemplateAction::SetStatutoryRule(rule) => match rule {
            StatutoryRule::Epf(rule) => inputs.statutory.epf = Some(rule),
            StatutoryRule::Esi(rule) => inputs.statutory.esi = Some(rule),
            StatutoryRule::Pt(rule) => inputs.statutory.pt = Some(rule),
            StatutoryRule::Lwf(rule) => inputs.statutory.lwf = Some(rule),
            StatutoryRule::Bonus(rule) => inputs.statutory.bonus = Some(rule),
        },
        TemplateAction::ClearStatutoryRule(kind) => match kind {
            StatutoryKind::Epf => inputs.statutory.epf = None,
            StatutoryKind::Esi => inputs.statutory.esi = None,
            StatutoryKind::Pt => inputs.statutory.pt = None,
            StatutoryKind::Lwf => inputs.statutory.lwf = None,
            StatutoryKind::Bonus => inputs.statutory.bonus = None,
        },
        TemplateAction::PrioritizeComponent(component) => {
            let Some(payment_field_id) = component.target.payment_field_id() else {
                debug!(
                    target_type = component.target.kind().as_str(),
                    "Ignoring draft for a statutory component"
                );
                return draft.clone();
            };
            inputs
                .prioritized
                .retain(|c| c.target.payment_field_id() != Some(payment_field_id));
            inputs.prioritized.push(component);
        }
        TemplateAction::ClearPrioritized => {
            inputs.prioritized.clear();
        }
    }

    let next = TemplateDraft::new(inputs);
    debug!(
        components = next.components.components.len(),
        net_amount = %next.components.net_amount(),
        "Recomputed template draft"
    );
    next
}
