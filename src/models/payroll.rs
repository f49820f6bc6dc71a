//! Payroll record model and its line items.
//!
//! A [`Payroll`] holds one employee's compensation for one pay period:
//! a basic salary, six allowance amounts and five deduction amounts.
//! The derived totals are cached on the record by the aggregator and
//! can only be read through [`Payroll::totals`].

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Payment state of a payroll record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Awaiting payment.
    #[default]
    Pending,
    /// Paid out; payment date and method are recorded.
    Paid,
    /// Held back by the finance office.
    OnHold,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayrollStatus::Pending => "Pending",
            PayrollStatus::Paid => "Paid",
            PayrollStatus::OnHold => "On Hold",
        };
        f.write_str(label)
    }
}

/// Allowance amounts added on top of the basic salary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowances {
    /// House rent allowance.
    pub house_rent: Decimal,
    /// Medical allowance.
    pub medical: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Dearness allowance.
    pub dearness: Decimal,
    /// Performance bonus.
    pub performance_bonus: Decimal,
    /// Any other allowance.
    pub other: Decimal,
}

impl Allowances {
    /// Returns each allowance paired with its display label, in slip order.
    pub fn items(&self) -> [(&'static str, Decimal); 6] {
        [
            ("House Rent Allowance", self.house_rent),
            ("Medical Allowance", self.medical),
            ("Conveyance Allowance", self.conveyance),
            ("Dearness Allowance", self.dearness),
            ("Performance Bonus", self.performance_bonus),
            ("Other Allowances", self.other),
        ]
    }
}

/// Deduction amounts subtracted from the gross salary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deductions {
    /// Income tax withheld for the period.
    pub income_tax: Decimal,
    /// Provident fund contribution.
    pub provident_fund: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Loan repayment.
    pub loan: Decimal,
    /// Any other deduction.
    pub other: Decimal,
}

impl Deductions {
    /// Returns each deduction paired with its display label, in slip order.
    pub fn items(&self) -> [(&'static str, Decimal); 5] {
        [
            ("Income Tax", self.income_tax),
            ("Provident Fund", self.provident_fund),
            ("Health Insurance", self.health_insurance),
            ("Loan Repayment", self.loan),
            ("Other Deductions", self.other),
        ]
    }
}

/// Totals derived from a payroll's line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of all allowances.
    pub total_allowances: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Basic salary plus total allowances.
    pub gross_salary: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
}

/// One employee's compensation for one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Payroll, PayrollStatus};
/// use rust_decimal::Decimal;
///
/// let payroll = Payroll::new(17, "Dec-2025", Decimal::new(30000, 0));
/// assert_eq!(payroll.status, PayrollStatus::Pending);
/// assert!(payroll.totals().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    /// Record id; 0 until the record is first saved.
    #[serde(default)]
    pub id: u64,
    /// The employee this payroll belongs to.
    pub employee_id: i64,
    /// Pay period label (e.g., "Dec-2025").
    pub period: String,
    /// Basic salary for the period.
    pub basic_salary: Decimal,
    /// Allowance line items.
    #[serde(default)]
    pub allowances: Allowances,
    /// Deduction line items.
    #[serde(default)]
    pub deductions: Deductions,
    /// Cached totals, written only by the aggregator. Serialized for
    /// inspection but never read back.
    #[serde(skip_deserializing)]
    totals: Option<PayrollTotals>,
    /// Payment state.
    #[serde(default)]
    pub status: PayrollStatus,
    /// Date the payroll was paid.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// How the payroll was paid (e.g., "Bank Transfer").
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl Payroll {
    /// Creates a pending payroll with zero allowances and deductions.
    pub fn new(employee_id: i64, period: impl Into<String>, basic_salary: Decimal) -> Self {
        Self {
            employee_id,
            period: period.into(),
            basic_salary,
            ..Self::default()
        }
    }

    /// Returns the cached totals, if they have been calculated.
    pub fn totals(&self) -> Option<&PayrollTotals> {
        self.totals.as_ref()
    }

    /// Returns true once the aggregator has cached totals on this record.
    pub fn is_calculated(&self) -> bool {
        self.totals.is_some()
    }

    pub(crate) fn cache_totals(&mut self, totals: PayrollTotals) {
        self.totals = Some(totals);
    }

    /// Records payment and moves the payroll to [`PayrollStatus::Paid`].
    ///
    /// Fails if totals were never calculated or the payroll is already paid.
    pub fn mark_paid(
        &mut self,
        payment_date: NaiveDate,
        payment_method: impl Into<String>,
    ) -> EngineResult<()> {
        if self.status == PayrollStatus::Paid {
            return Err(EngineError::AlreadyPaid {
                payroll_id: self.id,
            });
        }
        if !self.is_calculated() {
            return Err(EngineError::TotalsNotCalculated {
                payroll_id: self.id,
            });
        }

        self.status = PayrollStatus::Paid;
        self.payment_date = Some(payment_date);
        self.payment_method = Some(payment_method.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calculated_payroll() -> Payroll {
        let mut payroll = Payroll::new(1, "Dec-2025", dec("30000"));
        payroll.id = 5;
        payroll.cache_totals(PayrollTotals {
            total_allowances: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            gross_salary: dec("30000"),
            net_salary: dec("30000"),
        });
        payroll
    }

    #[test]
    fn test_new_payroll_is_zeroed_and_pending() {
        let payroll = Payroll::new(3, "Jan-2026", dec("45000"));
        assert_eq!(payroll.id, 0);
        assert_eq!(payroll.allowances, Allowances::default());
        assert_eq!(payroll.deductions, Deductions::default());
        assert_eq!(payroll.status, PayrollStatus::Pending);
        assert!(payroll.payment_date.is_none());
        assert!(payroll.payment_method.is_none());
        assert!(!payroll.is_calculated());
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(PayrollStatus::Pending.to_string(), "Pending");
        assert_eq!(PayrollStatus::Paid.to_string(), "Paid");
        assert_eq!(PayrollStatus::OnHold.to_string(), "On Hold");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&PayrollStatus::OnHold).unwrap();
        assert_eq!(json, "\"on_hold\"");
    }

    #[test]
    fn test_deserialize_payroll_with_missing_line_items() {
        let json = r#"{
            "employee_id": 12,
            "period": "Dec-2025",
            "basic_salary": "50000.00",
            "allowances": { "house_rent": "20000.00" }
        }"#;

        let payroll: Payroll = serde_json::from_str(json).unwrap();
        assert_eq!(payroll.employee_id, 12);
        assert_eq!(payroll.allowances.house_rent, dec("20000.00"));
        assert_eq!(payroll.allowances.medical, Decimal::ZERO);
        assert_eq!(payroll.deductions, Deductions::default());
        assert!(!payroll.is_calculated());
    }

    #[test]
    fn test_deserialized_totals_are_ignored() {
        let json = r#"{
            "employee_id": 12,
            "period": "Dec-2025",
            "basic_salary": "30000",
            "totals": {
                "total_allowances": "0",
                "total_deductions": "0",
                "gross_salary": "999999",
                "net_salary": "999999"
            }
        }"#;

        let payroll: Payroll = serde_json::from_str(json).unwrap();
        assert!(!payroll.is_calculated());
        assert!(payroll.totals().is_none());
    }

    #[test]
    fn test_allowance_items_keep_slip_order() {
        let allowances = Allowances {
            house_rent: dec("1"),
            medical: dec("2"),
            conveyance: dec("3"),
            dearness: dec("4"),
            performance_bonus: dec("5"),
            other: dec("6"),
        };
        let amounts: Vec<Decimal> = allowances.items().iter().map(|(_, a)| *a).collect();
        assert_eq!(
            amounts,
            vec![dec("1"), dec("2"), dec("3"), dec("4"), dec("5"), dec("6")]
        );
    }

    #[test]
    fn test_mark_paid_records_payment() {
        let mut payroll = calculated_payroll();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        payroll.mark_paid(date, "Bank Transfer").unwrap();

        assert_eq!(payroll.status, PayrollStatus::Paid);
        assert_eq!(payroll.payment_date, Some(date));
        assert_eq!(payroll.payment_method.as_deref(), Some("Bank Transfer"));
    }

    #[test]
    fn test_mark_paid_twice_fails() {
        let mut payroll = calculated_payroll();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        payroll.mark_paid(date, "Cash").unwrap();

        let result = payroll.mark_paid(date, "Cash");
        assert!(matches!(
            result,
            Err(EngineError::AlreadyPaid { payroll_id: 5 })
        ));
    }

    #[test]
    fn test_mark_paid_requires_calculated_totals() {
        let mut payroll = Payroll::new(1, "Dec-2025", dec("30000"));
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        let result = payroll.mark_paid(date, "Cash");
        assert!(matches!(
            result,
            Err(EngineError::TotalsNotCalculated { .. })
        ));
        assert_eq!(payroll.status, PayrollStatus::Pending);
    }
}
