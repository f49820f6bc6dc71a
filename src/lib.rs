//! Payroll Engine for a college finance office
//!
//! This crate computes gross and net salary from itemized allowances and
//! deductions, assesses progressive income tax against a slab table,
//! validates payroll records against business rules, and renders salary
//! slips as fixed-width text.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod processing;
pub mod slip;
pub mod store;
