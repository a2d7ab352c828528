//! Payroll component calculator for Indian salary templates
//!
//! This crate computes the components of a payment template: payment fields
//! derived from the monthly CTC, and the statutory deductions and earnings
//! (EPF, ESI, Professional Tax, Labour Welfare Fund, statutory bonus) built
//! on top of them. It also provides attendance-based pro-rata scaling,
//! working day counting and net pay aggregation.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod template;
