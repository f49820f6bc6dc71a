//! Payroll totals aggregation.
//!
//! Sums allowance and deduction line items into gross and net salary.
//! Everything here is pure except [`net_salary`], which caches the derived
//! totals on the record it is given.
//!
//! Sums use checked arithmetic. A total that does not fit in a `Decimal`
//! is reported as [`ValidationError::AmountOutOfRange`] naming the total.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Payroll, PayrollTotals};

use super::validation::ValidationError;

fn checked_sum<I>(amounts: I, total: &'static str) -> Result<Decimal, ValidationError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(amount))
        .ok_or(ValidationError::AmountOutOfRange { total })
}

/// Sums the six allowance line items.
pub fn total_allowances(payroll: &Payroll) -> Result<Decimal, ValidationError> {
    checked_sum(
        payroll.allowances.items().map(|(_, amount)| amount),
        "Total Allowances",
    )
}

/// Sums the five deduction line items.
pub fn total_deductions(payroll: &Payroll) -> Result<Decimal, ValidationError> {
    checked_sum(
        payroll.deductions.items().map(|(_, amount)| amount),
        "Total Deductions",
    )
}

/// Basic salary plus total allowances.
pub fn gross_salary(payroll: &Payroll) -> Result<Decimal, ValidationError> {
    let allowances = total_allowances(payroll)?;
    checked_sum([payroll.basic_salary, allowances], "Gross Salary")
}

/// Computes all derived totals from the line items without touching the record.
///
/// Cached totals on the record are ignored.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_totals;
/// use payroll_engine::models::Payroll;
/// use rust_decimal::Decimal;
///
/// let mut payroll = Payroll::new(1, "Dec-2025", Decimal::new(50000, 0));
/// payroll.allowances.house_rent = Decimal::new(20000, 0);
/// payroll.deductions.provident_fund = Decimal::new(6000, 0);
///
/// let totals = calculate_totals(&payroll)?;
/// assert_eq!(totals.gross_salary, Decimal::new(70000, 0));
/// assert_eq!(totals.net_salary, Decimal::new(64000, 0));
/// # Ok::<(), payroll_engine::calculation::ValidationError>(())
/// ```
pub fn calculate_totals(payroll: &Payroll) -> Result<PayrollTotals, ValidationError> {
    let total_allowances = total_allowances(payroll)?;
    let total_deductions = total_deductions(payroll)?;
    let gross_salary = checked_sum([payroll.basic_salary, total_allowances], "Gross Salary")?;
    let net_salary = gross_salary
        .checked_sub(total_deductions)
        .ok_or(ValidationError::AmountOutOfRange {
            total: "Net Salary",
        })?;

    Ok(PayrollTotals {
        total_allowances,
        total_deductions,
        gross_salary,
        net_salary,
    })
}

/// Recomputes the totals, caches them on the payroll and returns net salary.
///
/// This is the one operation that writes to a payroll record: afterwards
/// [`Payroll::totals`] holds the figures returned by [`calculate_totals`].
/// Calling it again on an unchanged record writes and returns the same
/// values. If a total is out of range the record is left untouched.
pub fn net_salary(payroll: &mut Payroll) -> Result<Decimal, ValidationError> {
    let totals = calculate_totals(payroll)?;

    debug!(
        payroll_id = payroll.id,
        employee_id = payroll.employee_id,
        gross_salary = %totals.gross_salary,
        total_deductions = %totals.total_deductions,
        net_salary = %totals.net_salary,
        "Calculated payroll totals"
    );

    payroll.cache_totals(totals);
    Ok(totals.net_salary)
}
