//! End-to-end payroll processing.
//!
//! This module ties the calculation, slip and store modules together so a
//! caller can process a stored payroll record with one call and receive
//! the calculated record, its slip and an audit trace.

mod processor;
mod run;

pub use processor::PayrollProcessor;
pub use run::PayrollRun;
