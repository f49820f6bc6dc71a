//! Progressive income-tax calculation.
//!
//! Tax is assessed on an annual salary against a slab table, each slab
//! taxing only the part of the salary that falls inside it. The result a
//! payroll needs is the monthly share of the annual tax.
//!
//! The calculator is a standalone utility: net salary takes the income-tax
//! deduction as entered on the payroll record and never calls into this
//! module on its own.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxSlabTable;
use crate::models::{AuditStep, Payroll};

use super::aggregation::gross_salary;
use super::validation::ValidationError;

const MONTHS_PER_YEAR: i64 = 12;

/// Tax charged by a single slab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabCharge {
    /// Slab start.
    pub lower: Decimal,
    /// Slab end; `None` for the top slab.
    pub upper: Option<Decimal>,
    /// Marginal rate of the slab.
    pub rate: Decimal,
    /// Portion of the salary falling inside the slab.
    pub taxable: Decimal,
    /// `taxable * rate`.
    pub tax: Decimal,
}

/// The full result of an income-tax assessment.
#[derive(Debug, Clone)]
pub struct IncomeTaxAssessment {
    /// The assessed annual salary.
    pub annual_salary: Decimal,
    /// Tax due for the year.
    pub annual_tax: Decimal,
    /// Tax due per month (`annual_tax / 12`, unrounded).
    pub monthly_tax: Decimal,
    /// Per-slab breakdown, only for slabs the salary reaches.
    pub slab_charges: Vec<SlabCharge>,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Calculates the monthly income tax on an annual salary using the
/// standard slab table.
///
/// Salaries at or below zero are tax exempt and yield zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::models::round_amount;
/// use rust_decimal::Decimal;
///
/// // 12,500 + 100,000 * 20% = 32,500 a year
/// let monthly = calculate_income_tax(Decimal::new(600_000, 0));
/// assert_eq!(round_amount(monthly), Decimal::new(270833, 2));
/// ```
pub fn calculate_income_tax(annual_salary: Decimal) -> Decimal {
    assess_income_tax(annual_salary, TaxSlabTable::standard(), 1).monthly_tax
}

/// Assesses income tax on an annual salary against the given slab table.
///
/// # Arguments
///
/// * `annual_salary` - Salary for the whole year
/// * `table` - The slab table to assess against
/// * `step_number` - The step number for audit trail sequencing
pub fn assess_income_tax(
    annual_salary: Decimal,
    table: &TaxSlabTable,
    step_number: u32,
) -> IncomeTaxAssessment {
    let mut slab_charges = Vec::new();

    if annual_salary > Decimal::ZERO {
        for slab in table.slabs() {
            if annual_salary <= slab.lower {
                break;
            }
            let top = match slab.upper {
                Some(upper) => annual_salary.min(upper),
                None => annual_salary,
            };
            let taxable = top - slab.lower;
            slab_charges.push(SlabCharge {
                lower: slab.lower,
                upper: slab.upper,
                rate: slab.rate,
                taxable,
                tax: taxable * slab.rate,
            });
        }
    }

    let annual_tax: Decimal = slab_charges.iter().map(|c| c.tax).sum();
    let monthly_tax = annual_tax / Decimal::from(MONTHS_PER_YEAR);

    debug!(
        annual_salary = %annual_salary,
        annual_tax = %annual_tax,
        monthly_tax = %monthly_tax,
        slabs_reached = slab_charges.len(),
        "Assessed income tax"
    );

    let reasoning = if slab_charges.is_empty() {
        format!(
            "Annual salary {} is not taxable; monthly tax is 0",
            annual_salary.normalize()
        )
    } else {
        let parts: Vec<String> = slab_charges
            .iter()
            .map(|c| format!("{} x {}", c.taxable.normalize(), c.rate.normalize()))
            .collect();
        format!(
            "{} = {} a year, {} a month",
            parts.join(" + "),
            annual_tax.normalize(),
            monthly_tax.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax Assessment".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.normalize().to_string(),
            "slab_count": table.slabs().len()
        }),
        output: serde_json::json!({
            "annual_tax": annual_tax.normalize().to_string(),
            "monthly_tax": monthly_tax.round_dp(2).normalize().to_string(),
            "slabs_reached": slab_charges.len()
        }),
        reasoning,
    };

    IncomeTaxAssessment {
        annual_salary,
        annual_tax,
        monthly_tax,
        slab_charges,
        audit_step,
    }
}

/// Suggests the monthly income-tax deduction for a payroll.
///
/// The record's gross salary (basic plus allowances) is annualised and
/// assessed. The payroll itself is not changed.
pub fn estimate_monthly_tax(
    payroll: &Payroll,
    table: &TaxSlabTable,
) -> Result<Decimal, ValidationError> {
    Ok(assess_payroll_income_tax(payroll, table, 1)?.monthly_tax)
}

/// Assesses income tax on a payroll's annualised gross salary.
///
/// Fails with [`ValidationError::AmountOutOfRange`] if the gross or the
/// annualised salary cannot be represented.
pub fn assess_payroll_income_tax(
    payroll: &Payroll,
    table: &TaxSlabTable,
    step_number: u32,
) -> Result<IncomeTaxAssessment, ValidationError> {
    let annual_salary = gross_salary(payroll)?
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .ok_or(ValidationError::AmountOutOfRange {
            total: "Annual Salary",
        })?;
    Ok(assess_income_tax(annual_salary, table, step_number))
}
