//! Payroll run result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AuditTrace, Payroll, SalarySlip};

/// The outcome of processing one payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub processed_at: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The calculated record, as saved to the store.
    pub payroll: Payroll,
    /// The slip built from the calculated record.
    pub slip: SalarySlip,
    /// The slip rendered as fixed-width text.
    pub rendered_slip: String,
    /// Steps taken during the run.
    pub audit_trace: AuditTrace,
}
