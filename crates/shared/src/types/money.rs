//! Presentation rounding for monetary and percentage values.
//!
//! CRITICAL: Never use floating-point for money calculations. The engine keeps
//! full `Decimal` precision internally; these helpers are applied only when a
//! value leaves the system (API responses, exports).

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used when rendering currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Decimal places used when rendering percentages.
pub const PERCENT_DECIMAL_PLACES: u32 = 2;

/// Rounds a currency amount to the cent using banker's rounding.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a percentage to two decimal places, half away from zero.
#[must_use]
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
