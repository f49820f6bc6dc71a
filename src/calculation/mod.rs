//! Calculation logic for the Payroll Engine.
//!
//! This module contains the progressive income-tax calculator, the
//! aggregation of allowances and deductions into gross and net salary,
//! and the business-rule validator for payroll records.

mod aggregation;
mod income_tax;
mod validation;

pub use aggregation::{
    calculate_totals, gross_salary, net_salary, total_allowances, total_deductions,
};
pub use income_tax::{
    IncomeTaxAssessment, SlabCharge, assess_income_tax, assess_payroll_income_tax,
    calculate_income_tax, estimate_monthly_tax,
};
pub use validation::{ValidationError, validate};
