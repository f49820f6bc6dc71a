//! Salary slip model.
//!
//! A [`SalarySlip`] is a denormalized snapshot of a calculated payroll,
//! ready for display or printing. It owns copies of every amount, so it is
//! unaffected by later changes to the payroll it was built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Allowances, Deductions};

/// Identity details of the employee a slip is issued to.
///
/// These are not carried by a payroll record and are supplied by the
/// caller (typically from the employee directory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Full name.
    pub name: String,
    /// Staff number as printed on documents (e.g., "EMP-0042").
    pub employee_number: String,
    /// Job title.
    pub designation: String,
    /// Department name.
    pub department: String,
}

/// A display-ready salary slip for one payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// Id of the payroll record the slip was built from.
    pub payroll_id: u64,
    /// Id of the employee.
    pub employee_id: i64,
    /// Employee identity block.
    pub employee: EmployeeDetails,
    /// First label of the covered period.
    pub period_start: String,
    /// Last label of the covered period.
    pub period_end: String,
    /// Basic salary.
    pub basic_salary: Decimal,
    /// Allowance line items.
    pub allowances: Allowances,
    /// Deduction line items.
    pub deductions: Deductions,
    /// Sum of all allowances.
    pub total_allowances: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Basic salary plus total allowances.
    pub gross_salary: Decimal,
    /// Amount paid out.
    pub net_salary: Decimal,
    /// Payment status label (e.g., "Pending").
    pub payment_status: String,
}

impl SalarySlip {
    /// Returns the slip with the employee identity block attached.
    pub fn with_employee(self, employee: EmployeeDetails) -> Self {
        Self { employee, ..self }
    }

    /// Returns the slip covering the given period labels.
    pub fn with_period(self, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            period_start: start.into(),
            period_end: end.into(),
            ..self
        }
    }
}
