//! Monetary rounding and display helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places, halves away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(30000, 0)), "30000.00");
/// assert_eq!(format_amount(Decimal::new(27083333, 4)), "2708.33");
/// assert_eq!(format_amount(Decimal::new(1005, 3)), "1.01");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    // Precision pads with zeros even when the value has no room to rescale.
    format!("{:.2}", round_amount(amount))
}
