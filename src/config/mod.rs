//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides the income-tax slab table (a built-in standard
//! table, or one loaded from YAML) and the salary slip layout.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Slip title: {}", config.slip_layout().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_SLIP_TITLE, DEFAULT_SLIP_WIDTH, MIN_SLIP_WIDTH, PayrollConfig, SlipLayout, TaxSlab,
    TaxSlabTable, TaxSlabsFile,
};
