//! Salary slip building and rendering.
//!
//! A calculated [`Payroll`](crate::models::Payroll) is projected into a
//! [`SalarySlip`](crate::models::SalarySlip) and then rendered as a
//! fixed-width text report for printing or preview.

mod builder;
mod formatter;

pub use builder::build_slip;
pub use formatter::{format_slip, format_slip_with, write_slip};
