//! Template component models.
//!
//! A [`TemplateComponent`] is one earning or deduction line of a payment
//! template. What the line is computed from is carried by the
//! [`ComponentTarget`] sum type, so a component can reference exactly one
//! payment field or statutory rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a line adds to or subtracts from net pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Adds to net pay.
    Earning,
    /// Subtracts from net pay.
    Deduction,
}

/// The kind of rule a component was computed from.
///
/// Used to match existing components against rules without caring about
/// the referenced id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A company payment field.
    PaymentFields,
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

impl TargetKind {
    /// Returns the wire name used for `target_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::PaymentFields => "payment_fields",
            TargetKind::Epf => "epf",
            TargetKind::Esi => "esi",
            TargetKind::Pt => "pt",
            TargetKind::Lwf => "lwf",
            TargetKind::Bonus => "bonus",
        }
    }
}

/// The rule a component was computed from, tagged by `target_type`.
///
/// # Example
///
/// ```
/// use payroll_components::models::{ComponentTarget, TargetKind};
/// use uuid::Uuid;
///
/// let target = ComponentTarget::Epf { epf_id: Uuid::nil() };
/// assert_eq!(target.kind(), TargetKind::Epf);
/// assert_eq!(target.target_id(), Uuid::nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target_type", rename_all = "snake_case")]
pub enum ComponentTarget {
    /// Computed from a payment field.
    #[serde(rename = "payment_fields")]
    PaymentField {
        /// The payment field id.
        payment_field_id: Uuid,
    },
    /// Computed from the EPF rule.
    Epf {
        /// The EPF rule id.
        epf_id: Uuid,
    },
    /// Computed from the ESI rule.
    Esi {
        /// The ESI rule id.
        esi_id: Uuid,
    },
    /// Computed from a professional tax rule.
    Pt {
        /// The professional tax rule id.
        pt_id: Uuid,
    },
    /// Computed from a labour welfare fund rule.
    Lwf {
        /// The labour welfare fund rule id.
        lwf_id: Uuid,
    },
    /// Computed from the statutory bonus rule.
    Bonus {
        /// The statutory bonus rule id.
        bonus_id: Uuid,
    },
}

impl ComponentTarget {
    /// Returns the kind of rule this target refers to.
    pub fn kind(&self) -> TargetKind {
        match self {
            ComponentTarget::PaymentField { .. } => TargetKind::PaymentFields,
            ComponentTarget::Epf { .. } => TargetKind::Epf,
            ComponentTarget::Esi { .. } => TargetKind::Esi,
            ComponentTarget::Pt { .. } => TargetKind::Pt,
            ComponentTarget::Lwf { .. } => TargetKind::Lwf,
            ComponentTarget::Bonus { .. } => TargetKind::Bonus,
        }
    }

    /// Returns the id of the referenced field or rule.
    pub fn target_id(&self) -> Uuid {
        match *self {
            ComponentTarget::PaymentField { payment_field_id } => payment_field_id,
            ComponentTarget::Epf { epf_id } => epf_id,
            ComponentTarget::Esi { esi_id } => esi_id,
            ComponentTarget::Pt { pt_id } => pt_id,
            ComponentTarget::Lwf { lwf_id } => lwf_id,
            ComponentTarget::Bonus { bonus_id } => bonus_id,
        }
    }

    /// Returns the payment field id if this target is a payment field.
    pub fn payment_field_id(&self) -> Option<Uuid> {
        match *self {
            ComponentTarget::PaymentField { payment_field_id } => Some(payment_field_id),
            _ => None,
        }
    }
}

/// One earning or deduction line of a payment template.
///
/// `id` and `template_id` are only present once the component has been
/// persisted. `calculation_value` serializes as a decimal string; values
/// computed by this crate always carry exactly three decimal places.
///
/// # Example
///
/// ```
/// use payroll_components::models::{ComponentTarget, ComponentType, TemplateComponent};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let component = TemplateComponent {
///     id: None,
///     template_id: None,
///     target: ComponentTarget::Pt { pt_id: Uuid::nil() },
///     component_type: ComponentType::Deduction,
///     calculation_value: Some(Decimal::new(200_000, 3)),
/// };
///
/// let json = serde_json::to_value(&component).unwrap();
/// assert_eq!(json["target_type"], "pt");
/// assert_eq!(json["calculation_value"], "200.000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateComponent {
    /// Persisted component id, if any.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Persisted template id, if any.
    #[serde(default)]
    pub template_id: Option<Uuid>,
    /// The field or rule this line is computed from.
    #[serde(flatten)]
    pub target: ComponentTarget,
    /// Earning or deduction.
    pub component_type: ComponentType,
    /// The monthly value of this line.
    #[serde(default)]
    pub calculation_value: Option<Decimal>,
}

impl TemplateComponent {
    /// Returns the signed contribution of this line to net pay.
    ///
    /// Missing values contribute nothing.
    pub fn signed_value(&self) -> Decimal {
        let value = self.calculation_value.unwrap_or(Decimal::ZERO);
        match self.component_type {
            ComponentType::Earning => value,
            ComponentType::Deduction => -value,
        }
    }
}
