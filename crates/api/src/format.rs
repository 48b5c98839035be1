//! Presentation formatting for response bodies.
//!
//! Decimals leave the API as strings rounded to two places; the engine never
//! rounds.

use parkfin_core::MonthlyVector;
use parkfin_core::analytics::{Ratio, UndefinedReason};
use parkfin_shared::types::{round_currency, round_percent};
use rust_decimal::Decimal;
use serde::Serialize;

/// Formats a currency amount, e.g. `"1234.50"`.
#[must_use]
pub fn money(amount: Decimal) -> String {
    format!("{:.2}", round_currency(amount))
}

/// Formats a percentage, e.g. `"12.50"`.
#[must_use]
pub fn percent(value: Decimal) -> String {
    format!("{:.2}", round_percent(value))
}

/// Formats twelve monthly amounts.
#[must_use]
pub fn money_months(months: &MonthlyVector) -> Vec<String> {
    months.iter().copied().map(money).collect()
}

/// Formats twelve monthly percentages.
#[must_use]
pub fn percent_months(months: &MonthlyVector) -> Vec<String> {
    months.iter().copied().map(percent).collect()
}

/// Ratio as rendered in JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatioResponse {
    /// Finite value.
    Defined {
        /// Rounded value.
        value: String,
    },
    /// No finite value.
    Undefined {
        /// Why no value exists.
        reason: UndefinedReason,
    },
}

impl From<Ratio> for RatioResponse {
    fn from(ratio: Ratio) -> Self {
        match ratio {
            Ratio::Defined { value } => Self::Defined {
                value: percent(value),
            },
            Ratio::Undefined { reason } => Self::Undefined { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_pads_and_rounds() {
        assert_eq!(money(dec!(10000)), "10000.00");
        assert_eq!(money(dec!(8333.3333333333)), "8333.33");
        assert_eq!(money(dec!(0.125)), "0.12");
    }

    #[test]
    fn test_percent_rounds_half_away() {
        assert_eq!(percent(dec!(12.345)), "12.35");
        assert_eq!(percent(dec!(-100)), "-100.00");
    }

    #[test]
    fn test_ratio_rendering() {
        let defined = serde_json::to_value(RatioResponse::from(Ratio::defined(dec!(12.5)))).unwrap();
        assert_eq!(defined, serde_json::json!({ "kind": "defined", "value": "12.50" }));

        let undefined = serde_json::to_value(RatioResponse::from(Ratio::undefined(
            UndefinedReason::ZeroIncome,
        )))
        .unwrap();
        assert_eq!(
            undefined,
            serde_json::json!({ "kind": "undefined", "reason": "zero_income" })
        );
    }
}
