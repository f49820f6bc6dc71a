//! Salary slip construction.

use tracing::{debug, warn};

use crate::calculation::calculate_totals;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeDetails, Payroll, SalarySlip};

/// Builds a salary slip from a calculated payroll.
///
/// Every amount and the payment status are copied from the payroll. The
/// period start and end both default to the payroll's period label; the
/// employee identity block is left empty for the caller to attach with
/// [`SalarySlip::with_employee`].
///
/// Fails with [`EngineError::TotalsNotCalculated`] if
/// [`net_salary`](crate::calculation::net_salary) has never been applied to
/// the payroll, and with [`EngineError::StaleTotals`] if line items changed
/// after the totals were cached.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::net_salary;
/// use payroll_engine::models::{EmployeeDetails, Payroll};
/// use payroll_engine::slip::build_slip;
/// use rust_decimal::Decimal;
///
/// let mut payroll = Payroll::new(12, "Dec-2025", Decimal::new(30000, 0));
/// net_salary(&mut payroll)?;
///
/// let slip = build_slip(&payroll)?.with_employee(EmployeeDetails {
///     name: "Ayesha Rahman".to_string(),
///     employee_number: "EMP-0012".to_string(),
///     designation: "Lecturer".to_string(),
///     department: "Physics".to_string(),
/// });
/// assert_eq!(slip.net_salary, Decimal::new(30000, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn build_slip(payroll: &Payroll) -> EngineResult<SalarySlip> {
    let totals = payroll
        .totals()
        .ok_or(EngineError::TotalsNotCalculated {
            payroll_id: payroll.id,
        })?;
    if *totals != calculate_totals(payroll)? {
        warn!(payroll_id = payroll.id, "Cached totals are out of date");
        return Err(EngineError::StaleTotals {
            payroll_id: payroll.id,
        });
    }

    debug!(
        payroll_id = payroll.id,
        employee_id = payroll.employee_id,
        "Building salary slip"
    );

    Ok(SalarySlip {
        payroll_id: payroll.id,
        employee_id: payroll.employee_id,
        employee: EmployeeDetails::default(),
        period_start: payroll.period.clone(),
        period_end: payroll.period.clone(),
        basic_salary: payroll.basic_salary,
        allowances: payroll.allowances.clone(),
        deductions: payroll.deductions.clone(),
        total_allowances: totals.total_allowances,
        total_deductions: totals.total_deductions,
        gross_salary: totals.gross_salary,
        net_salary: totals.net_salary,
        payment_status: payroll.status.to_string(),
    })
}
