//! Payment field definitions.
//!
//! A payment field is a company-configured earning or deduction (basic,
//! HRA, special allowance, canteen deduction, ...) whose monthly value is
//! derived from a fixed amount or a share of the monthly CTC.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ComponentType;

/// How the value of a payment field is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Paid every month from the field's configuration.
    Fixed,
    /// Entered per payroll run; no template value can be derived.
    Variable,
    /// Any payment type this crate does not know about.
    #[serde(other)]
    Other,
}

/// How the amount of a fixed payment field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// `amount` is the monthly value.
    Fixed,
    /// `amount` is a percentage of the monthly CTC.
    PercentageOfCtc,
    /// Any calculation type this crate does not compute.
    #[serde(other)]
    Other,
}

/// A configured earning or deduction field.
///
/// # Example
///
/// ```
/// use payroll_components::models::{CalculationType, PaymentFieldDefinition, PaymentType};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let basic = PaymentFieldDefinition {
///     id: Uuid::nil(),
///     name: "Basic".to_string(),
///     payment_type: PaymentType::Fixed,
///     calculation_type: CalculationType::PercentageOfCtc,
///     amount: Some(Decimal::new(50, 0)),
///     component_type: None,
///     consider_for_epf: true,
///     consider_for_esi: true,
///     is_pro_rata: true,
/// };
/// assert!(basic.is_fixed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFieldDefinition {
    /// Unique identifier of the field.
    pub id: Uuid,
    /// Display name (e.g. "Basic", "HRA").
    #[serde(default)]
    pub name: String,
    /// How the field is paid.
    pub payment_type: PaymentType,
    /// How `amount` is interpreted.
    pub calculation_type: CalculationType,
    /// Fixed monthly amount or CTC percentage, depending on `calculation_type`.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Whether the field is an earning or a deduction, when configured.
    #[serde(default)]
    pub component_type: Option<ComponentType>,
    /// Whether the field's value counts towards the EPF wage base.
    #[serde(default)]
    pub consider_for_epf: bool,
    /// Whether the field's value counts towards the ESI wage base.
    #[serde(default)]
    pub consider_for_esi: bool,
    /// Whether the field is scaled by attendance when payroll is run.
    #[serde(default)]
    pub is_pro_rata: bool,
}

impl PaymentFieldDefinition {
    /// Returns true if the field is paid from its configuration every month.
    pub fn is_fixed(&self) -> bool {
        self.payment_type == PaymentType::Fixed
    }
}
