//! Core data models for the payroll component calculator.
//!
//! This module contains the configuration records the calculator consumes
//! and the component records it produces.

mod audit;
mod payment_field;
mod payroll_period;
mod salary;
mod statutory;
mod template_component;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

pub use audit::{AuditStep, AuditTrace};
pub use payment_field::{CalculationType, PaymentFieldDefinition, PaymentType};
pub use payroll_period::{Holiday, PayrollPeriod};
pub use salary::{EmployeeSalary, EntryType, SalaryEntry};
pub use statutory::{
    DeductionCycle, EpfRule, EsiRule, LabourWelfareFundRule, ProfessionalTaxRule, SalaryBracket,
    StatutoryBonusRule, StatutoryRuleSet,
};
pub use template_component::{ComponentTarget, ComponentType, TargetKind, TemplateComponent};

/// Per-payment-field contributions to a statutory wage base, keyed by field id.
pub type WageContributions = BTreeMap<Uuid, Decimal>;
