//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod money;
mod payroll;
mod salary_slip;

pub use audit::{AuditStep, AuditTrace};
pub use money::{format_amount, round_amount};
pub use payroll::{Allowances, Deductions, Payroll, PayrollStatus, PayrollTotals};
pub use salary_slip::{EmployeeDetails, SalarySlip};
