//! In-memory payroll store.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::EngineResult;
use crate::models::Payroll;

use super::PayrollStore;

/// A [`PayrollStore`] backed by an ordered map.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Payroll;
/// use payroll_engine::store::{InMemoryPayrollStore, PayrollStore};
/// use rust_decimal::Decimal;
///
/// let mut store = InMemoryPayrollStore::new();
/// let id = store.save_payroll(Payroll::new(3, "Dec-2025", Decimal::new(30000, 0)))?;
/// assert_eq!(store.load_payroll(id).unwrap().employee_id, 3);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPayrollStore {
    records: BTreeMap<u64, Payroll>,
    last_id: u64,
}

impl InMemoryPayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PayrollStore for InMemoryPayrollStore {
    fn load_payroll(&self, id: u64) -> Option<Payroll> {
        self.records.get(&id).cloned()
    }

    fn save_payroll(&mut self, mut payroll: Payroll) -> EngineResult<u64> {
        if payroll.id == 0 {
            self.last_id += 1;
            payroll.id = self.last_id;
        } else {
            self.last_id = self.last_id.max(payroll.id);
        }

        let id = payroll.id;
        debug!(payroll_id = id, employee_id = payroll.employee_id, "Saved payroll");
        self.records.insert(id, payroll);
        Ok(id)
    }

    fn list_payroll(&self) -> Vec<Payroll> {
        self.records.values().cloned().collect()
    }
}
