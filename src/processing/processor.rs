//! Payroll processing against a store.
//!
//! [`PayrollProcessor`] moves a stored record through its lifecycle:
//! validated, calculated, saved, rendered as a slip, and finally marked
//! paid. Each stage is a call into the calculation and slip modules; the
//! processor only sequences them and records what happened.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{IncomeTaxAssessment, assess_payroll_income_tax, net_salary, validate};
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, EmployeeDetails, Payroll, PayrollStatus, PayrollTotals,
};
use crate::slip::{build_slip, format_slip_with};
use crate::store::PayrollStore;

use super::PayrollRun;

/// Processes payroll records held in a [`PayrollStore`].
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{EmployeeDetails, Payroll};
/// use payroll_engine::processing::PayrollProcessor;
/// use payroll_engine::store::{InMemoryPayrollStore, PayrollStore};
/// use rust_decimal::Decimal;
///
/// let mut store = InMemoryPayrollStore::new();
/// let id = store.save_payroll(Payroll::new(3, "Dec-2025", Decimal::new(30000, 0)))?;
///
/// let mut processor = PayrollProcessor::new(store, PayrollConfig::default());
/// let run = processor.process(id, &EmployeeDetails::default())?;
/// assert_eq!(run.slip.net_salary, Decimal::new(30000, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct PayrollProcessor<S> {
    store: S,
    config: PayrollConfig,
}

impl<S: PayrollStore> PayrollProcessor<S> {
    /// Creates a processor over a store.
    pub fn new(store: S, config: PayrollConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the processor and returns the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates, calculates, saves and renders a stored payroll.
    ///
    /// Fails with:
    /// - `PayrollNotFound` if no record has the id
    /// - `AlreadyPaid` if the record has been paid
    /// - `Validation` if the record breaks a business rule; nothing is saved
    pub fn process(&mut self, id: u64, employee: &EmployeeDetails) -> EngineResult<PayrollRun> {
        let run_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(run_id = %run_id, payroll_id = id, "Processing payroll");

        let mut payroll = self.load(id)?;
        if payroll.status == PayrollStatus::Paid {
            warn!(run_id = %run_id, payroll_id = id, "Refusing to reprocess a paid payroll");
            return Err(EngineError::AlreadyPaid { payroll_id: id });
        }

        if let Err(violation) = validate(&payroll) {
            warn!(
                run_id = %run_id,
                payroll_id = id,
                error = %violation,
                "Payroll rejected"
            );
            return Err(violation.into());
        }
        let mut steps = vec![validation_step(&payroll, 1)];

        net_salary(&mut payroll)?;
        if let Some(totals) = payroll.totals() {
            steps.push(totals_step(&payroll, totals, 2));
        }

        self.store.save_payroll(payroll.clone())?;

        let slip = build_slip(&payroll)?.with_employee(employee.clone());
        let rendered_slip = format_slip_with(&slip, self.config.slip_layout())?;

        let duration = start_time.elapsed();
        info!(
            run_id = %run_id,
            payroll_id = id,
            employee_id = payroll.employee_id,
            net_salary = %slip.net_salary,
            duration_us = duration.as_micros(),
            "Payroll processed successfully"
        );

        Ok(PayrollRun {
            run_id,
            processed_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            payroll,
            slip,
            rendered_slip,
            audit_trace: AuditTrace {
                steps,
                duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            },
        })
    }

    /// Marks a processed payroll as paid and saves it.
    pub fn mark_paid(
        &mut self,
        id: u64,
        payment_date: NaiveDate,
        payment_method: &str,
    ) -> EngineResult<Payroll> {
        let mut payroll = self.load(id)?;
        payroll.mark_paid(payment_date, payment_method)?;
        self.store.save_payroll(payroll.clone())?;

        info!(
            payroll_id = id,
            payment_date = %payment_date,
            payment_method,
            "Payroll marked as paid"
        );
        Ok(payroll)
    }

    /// Suggests the monthly income-tax deduction for a stored payroll.
    ///
    /// The assessment uses the configured slab table and does not change
    /// the record.
    pub fn suggest_income_tax(&self, id: u64) -> EngineResult<IncomeTaxAssessment> {
        let payroll = self.load(id)?;
        Ok(assess_payroll_income_tax(
            &payroll,
            self.config.tax_slabs(),
            1,
        )?)
    }

    fn load(&self, id: u64) -> EngineResult<Payroll> {
        self.store.load_payroll(id).ok_or_else(|| {
            warn!(payroll_id = id, "Payroll not found");
            EngineError::PayrollNotFound { id }
        })
    }
}

fn validation_step(payroll: &Payroll, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "payroll_validation".to_string(),
        rule_name: "Payroll Validation".to_string(),
        input: serde_json::json!({
            "employee_id": payroll.employee_id,
            "period": payroll.period,
            "basic_salary": payroll.basic_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "valid": true
        }),
        reasoning: "All payroll business rules passed".to_string(),
    }
}

fn totals_step(payroll: &Payroll, totals: &PayrollTotals, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "payroll_totals".to_string(),
        rule_name: "Payroll Totals".to_string(),
        input: serde_json::json!({
            "basic_salary": payroll.basic_salary.normalize().to_string(),
            "total_allowances": totals.total_allowances.normalize().to_string(),
            "total_deductions": totals.total_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_salary": totals.gross_salary.normalize().to_string(),
            "net_salary": totals.net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {} gross; {} - {} = {} net",
            payroll.basic_salary.normalize(),
            totals.total_allowances.normalize(),
            totals.gross_salary.normalize(),
            totals.gross_salary.normalize(),
            totals.total_deductions.normalize(),
            totals.net_salary.normalize()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ValidationError;
    use crate::store::InMemoryPayrollStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn processor_with(payroll: Payroll) -> (PayrollProcessor<InMemoryPayrollStore>, u64) {
        let mut store = InMemoryPayrollStore::new();
        let id = store.save_payroll(payroll).unwrap();
        (PayrollProcessor::new(store, PayrollConfig::default()), id)
    }

    fn paid_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    #[test]
    fn test_process_saves_calculated_totals() {
        let (mut processor, id) = processor_with(Payroll::new(4, "Dec-2025", dec("30000")));

        let run = processor.process(id, &EmployeeDetails::default()).unwrap();

        assert_eq!(run.payroll.totals().unwrap().net_salary, dec("30000"));
        let stored = processor.store().load_payroll(id).unwrap();
        assert!(stored.is_calculated());
        assert_eq!(stored, run.payroll);
    }

    #[test]
    fn test_process_records_audit_steps_in_order() {
        let (mut processor, id) = processor_with(Payroll::new(4, "Dec-2025", dec("30000")));

        let run = processor.process(id, &EmployeeDetails::default()).unwrap();

        let rule_ids: Vec<&str> = run
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(rule_ids, vec!["payroll_validation", "payroll_totals"]);
        assert_eq!(
            run.audit_trace.step("payroll_totals").unwrap().output["net_salary"],
            "30000"
        );
    }

    #[test]
    fn test_missing_payroll_is_reported() {
        let mut processor =
            PayrollProcessor::new(InMemoryPayrollStore::new(), PayrollConfig::default());

        let result = processor.process(8, &EmployeeDetails::default());
        assert!(matches!(result, Err(EngineError::PayrollNotFound { id: 8 })));
    }

    #[test]
    fn test_invalid_payroll_is_not_saved() {
        let mut payroll = Payroll::new(4, "Dec-2025", dec("10000"));
        payroll.deductions.loan = dec("15000");
        let (mut processor, id) = processor_with(payroll);

        let result = processor.process(id, &EmployeeDetails::default());

        assert!(matches!(result, Err(EngineError::Validation(_))));
        assert!(!processor.store().load_payroll(id).unwrap().is_calculated());
    }

    #[test]
    fn test_mark_paid_after_processing() {
        let (mut processor, id) = processor_with(Payroll::new(4, "Dec-2025", dec("30000")));
        processor.process(id, &EmployeeDetails::default()).unwrap();

        let paid = processor.mark_paid(id, paid_on(), "Bank Transfer").unwrap();

        assert_eq!(paid.status, PayrollStatus::Paid);
        let stored = processor.store().load_payroll(id).unwrap();
        assert_eq!(stored.payment_date, Some(paid_on()));
        assert_eq!(stored.payment_method.as_deref(), Some("Bank Transfer"));
    }

    #[test]
    fn test_mark_paid_before_processing_fails() {
        let (mut processor, id) = processor_with(Payroll::new(4, "Dec-2025", dec("30000")));

        let result = processor.mark_paid(id, paid_on(), "Cash");
        assert!(matches!(
            result,
            Err(EngineError::TotalsNotCalculated { .. })
        ));
    }

    #[test]
    fn test_paid_payroll_cannot_be_reprocessed() {
        let (mut processor, id) = processor_with(Payroll::new(4, "Dec-2025", dec("30000")));
        processor.process(id, &EmployeeDetails::default()).unwrap();
        processor.mark_paid(id, paid_on(), "Cash").unwrap();

        let result = processor.process(id, &EmployeeDetails::default());
        assert!(matches!(result, Err(EngineError::AlreadyPaid { .. })));
    }

    #[test]
    fn test_suggest_income_tax_uses_annualised_gross() {
        let mut payroll = Payroll::new(4, "Dec-2025", dec("40000"));
        payroll.allowances.dearness = dec("10000");
        let (processor, id) = processor_with(payroll);

        let assessment = processor.suggest_income_tax(id).unwrap();

        assert_eq!(assessment.annual_salary, dec("600000"));
        assert_eq!(assessment.annual_tax, dec("32500"));
        let stored = processor.store().load_payroll(id).unwrap();
        assert_eq!(stored.deductions.income_tax, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_payroll_is_rejected_and_not_saved() {
        let mut payroll = Payroll::new(4, "Dec-2025", Decimal::MAX);
        payroll.allowances.house_rent = Decimal::MAX;
        let (mut processor, id) = processor_with(payroll);

        let result = processor.process(id, &EmployeeDetails::default());

        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::AmountOutOfRange { .. }))
        ));
        assert!(!processor.store().load_payroll(id).unwrap().is_calculated());
        assert!(matches!(
            processor.suggest_income_tax(id),
            Err(EngineError::Validation(ValidationError::AmountOutOfRange { .. }))
        ));
    }
}
