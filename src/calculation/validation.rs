//! Payroll business-rule validation.
//!
//! Rules are checked in a fixed order and validation stops at the first
//! one that fails. Every failure carries the offending values so its
//! message can be shown to the user as is.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Payroll, format_amount};

use super::aggregation::{gross_salary, total_deductions};

/// A payroll business-rule violation.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The employee id is zero or negative.
    #[error("Employee ID must be a positive number (got {employee_id})")]
    InvalidEmployeeId {
        /// The rejected employee id.
        employee_id: i64,
    },

    /// The period label is blank.
    #[error("Pay period must not be empty")]
    EmptyPeriod,

    /// The basic salary is zero or negative.
    #[error("Basic salary must be greater than zero (got {})", amount(.basic_salary))]
    NonPositiveBasicSalary {
        /// The rejected basic salary.
        basic_salary: Decimal,
    },

    /// One or more allowances are negative.
    #[error("Allowances cannot be negative: {}", describe_items(.items))]
    NegativeAllowances {
        /// Every negative allowance with its amount.
        items: Vec<(String, Decimal)>,
    },

    /// One or more deductions are negative.
    #[error("Deductions cannot be negative: {}", describe_items(.items))]
    NegativeDeductions {
        /// Every negative deduction with its amount.
        items: Vec<(String, Decimal)>,
    },

    /// Total deductions are larger than the gross salary.
    #[error(
        "Total deductions ({}) cannot exceed gross salary ({})",
        amount(.total_deductions),
        amount(.gross)
    )]
    DeductionsExceedGross {
        /// Freshly computed total deductions.
        total_deductions: Decimal,
        /// Freshly computed gross salary.
        gross: Decimal,
    },

    /// A total is too large to be represented.
    #[error("{total} is too large to calculate")]
    AmountOutOfRange {
        /// Label of the total that overflowed.
        total: &'static str,
    },
}

fn amount(value: &Decimal) -> String {
    format_amount(*value)
}

fn describe_items(items: &[(String, Decimal)]) -> String {
    items
        .iter()
        .map(|(label, amount)| format!("{} = {}", label, format_amount(*amount)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn negative_items<const N: usize>(items: [(&'static str, Decimal); N]) -> Vec<(String, Decimal)> {
    items
        .into_iter()
        .filter(|(_, amount)| *amount < Decimal::ZERO)
        .map(|(label, amount)| (label.to_string(), amount))
        .collect()
}

/// Validates a payroll record against the business rules.
///
/// The checks run in this order:
/// 1. Employee id is positive
/// 2. Period label is not blank
/// 3. Basic salary is above zero
/// 4. No allowance is negative (all offenders reported together)
/// 5. No deduction is negative (all offenders reported together)
/// 6. Total deductions do not exceed gross salary
///
/// A record whose totals cannot be represented fails the last rule with
/// [`ValidationError::AmountOutOfRange`].
///
/// Totals for the last rule are recomputed from the line items; any totals
/// cached on the record are not consulted, so validation is correct before
/// and after [`net_salary`](super::net_salary) has run.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{ValidationError, validate};
/// use payroll_engine::models::Payroll;
/// use rust_decimal::Decimal;
///
/// let payroll = Payroll::new(0, "Dec-2025", Decimal::new(30000, 0));
/// assert_eq!(
///     validate(&payroll),
///     Err(ValidationError::InvalidEmployeeId { employee_id: 0 })
/// );
/// ```
pub fn validate(payroll: &Payroll) -> Result<(), ValidationError> {
    let result = check_rules(payroll);

    match &result {
        Ok(()) => debug!(
            payroll_id = payroll.id,
            employee_id = payroll.employee_id,
            "Payroll passed validation"
        ),
        Err(violation) => warn!(
            payroll_id = payroll.id,
            employee_id = payroll.employee_id,
            error = %violation,
            "Payroll failed validation"
        ),
    }

    result
}

fn check_rules(payroll: &Payroll) -> Result<(), ValidationError> {
    if payroll.employee_id <= 0 {
        return Err(ValidationError::InvalidEmployeeId {
            employee_id: payroll.employee_id,
        });
    }

    if payroll.period.trim().is_empty() {
        return Err(ValidationError::EmptyPeriod);
    }

    if payroll.basic_salary <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveBasicSalary {
            basic_salary: payroll.basic_salary,
        });
    }

    let items = negative_items(payroll.allowances.items());
    if !items.is_empty() {
        return Err(ValidationError::NegativeAllowances { items });
    }

    let items = negative_items(payroll.deductions.items());
    if !items.is_empty() {
        return Err(ValidationError::NegativeDeductions { items });
    }

    let total_deductions = total_deductions(payroll)?;
    let gross = gross_salary(payroll)?;
    if total_deductions > gross {
        return Err(ValidationError::DeductionsExceedGross {
            total_deductions,
            gross,
        });
    }

    Ok(())
}
