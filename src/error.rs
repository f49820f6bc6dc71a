//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while processing payroll.
//! Business-rule violations found by the validator are reported through
//! [`ValidationError`](crate::calculation::ValidationError) and wrapped here
//! when they abort a processing run.

use thiserror::Error;

use crate::calculation::ValidationError;

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::PayrollNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Payroll record not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but broke a structural rule.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the broken rule.
        message: String,
    },

    /// No payroll record exists with the requested id.
    #[error("Payroll record not found: {id}")]
    PayrollNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// The payroll record failed validation.
    #[error("Payroll validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An operation needed derived totals that were never computed.
    #[error("Totals have not been calculated for payroll {payroll_id}")]
    TotalsNotCalculated {
        /// The payroll record id.
        payroll_id: u64,
    },

    /// Cached totals no longer match the record's line items.
    #[error("Totals for payroll {payroll_id} are out of date; recalculate before building a slip")]
    StaleTotals {
        /// The payroll record id.
        payroll_id: u64,
    },

    /// The payroll record has already been paid.
    #[error("Payroll {payroll_id} is already marked as paid")]
    AlreadyPaid {
        /// The payroll record id.
        payroll_id: u64,
    },

    /// The slip layout is too narrow to hold the report columns.
    #[error("Slip layout width {width} is below the minimum of {minimum}")]
    LayoutTooNarrow {
        /// The configured width.
        width: usize,
        /// The smallest width the formatter accepts.
        minimum: usize,
    },

    /// An amount does not fit in the slip's amount column.
    #[error("Amount {amount} is too wide for a slip layout of width {width}")]
    AmountTooWide {
        /// The rendered amount.
        amount: String,
        /// The configured width.
        width: usize,
    },

    /// Writing the rendered slip to its destination failed.
    #[error("Failed to render salary slip: {0}")]
    Render(#[from] std::fmt::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
