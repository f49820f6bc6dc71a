//! Persistence seam for payroll records.
//!
//! The engine never talks to a database directly. Anything that can load,
//! save and list payroll records implements [`PayrollStore`];
//! [`InMemoryPayrollStore`] is the implementation used by tests and by
//! callers that keep records in memory.

mod memory;

pub use memory::InMemoryPayrollStore;

use crate::error::EngineResult;
use crate::models::Payroll;

/// Storage for payroll records.
pub trait PayrollStore {
    /// Loads the record with the given id.
    fn load_payroll(&self, id: u64) -> Option<Payroll>;

    /// Saves a record and returns its id.
    ///
    /// A record with id 0 has not been saved before and is assigned a new id.
    fn save_payroll(&mut self, payroll: Payroll) -> EngineResult<u64>;

    /// Lists all records ordered by id.
    fn list_payroll(&self) -> Vec<Payroll>;
}
