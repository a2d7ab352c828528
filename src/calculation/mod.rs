//! Calculation logic for the payroll component calculator.
//!
//! This module contains the builders that turn a payment field or a
//! statutory rule (EPF, ESI, Professional Tax, Labour Welfare Fund,
//! statutory bonus) into a template component, the helpers that assemble
//! statutory wage bases, attendance-based pro-rata scaling, working day
//! counting, and net pay aggregation.

mod contribution;
mod epf;
mod esi;
mod labour_welfare_fund;
mod net_amount;
mod payment_field;
mod pro_rata;
mod professional_tax;
mod rounding;
mod statutory_bonus;
mod working_days;

pub use contribution::{get_gross_value, get_value_for_epf, get_value_for_esi};
pub use epf::{DEFAULT_EPF_RATE, EPF_RESTRICT_VALUE, get_epf_component_from_field};
pub use esi::{ESI_EMPLOYEE_CONTRIBUTION, ESI_MAX_LIMIT, get_esi_component_from_field};
pub use labour_welfare_fund::{get_lwf_component_from_field, monthly_lwf_contribution};
pub use net_amount::{calculate_net_amount_after_entry_created, calculate_salary_total_net_amount};
pub use payment_field::{get_selected_payment_component_from_field, payment_field_value};
pub use pro_rata::{ProRataInput, calculate_pro_rata_amount};
pub use professional_tax::{get_pt_component_from_field, professional_tax_for_gross};
pub use rounding::{CALCULATION_SCALE, to_fixed_3};
pub use statutory_bonus::get_bonus_component_from_field;
pub use working_days::count_working_days;
