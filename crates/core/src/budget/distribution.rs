//! Spreading a line's projected amount across the twelve months.
//!
//! Allocation uses the Largest Remainder Method at [`INTERNAL_DECIMAL_PLACES`]:
//! 1. Calculate exact per-month shares
//! 2. Round each share toward zero
//! 3. Hand the leftover units, one each, to the months with the largest
//!    fractional parts (earlier month wins a tie)
//!
//! The twelve months therefore always sum exactly to the amount (rounded to
//! the internal precision), which keeps the matrix consistent with the line.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::LineDefect;
use crate::{MONTHS, MonthlyVector};

/// Precision kept for derived monthly values. Presentation rounds later.
pub const INTERNAL_DECIMAL_PLACES: u32 = 10;

/// How a line without an explicit monthly distribution is spread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Equal share every month.
    #[default]
    Even,
    /// Share proportional to a weight per month (e.g. summer-heavy park events).
    Seasonal {
        /// Relative weight for January..December.
        weights: MonthlyVector,
    },
}

impl DistributionPolicy {
    /// Spreads `amount` over twelve months.
    pub fn distribute(&self, amount: Decimal) -> Result<MonthlyVector, LineDefect> {
        match self {
            Self::Even => Ok(allocate_by_weights(amount, &[Decimal::ONE; MONTHS])),
            Self::Seasonal { weights } => {
                if weights.iter().any(Decimal::is_sign_negative) {
                    return Err(LineDefect::InvalidWeights);
                }
                if weights.iter().copied().sum::<Decimal>().is_zero() {
                    return Err(LineDefect::InvalidWeights);
                }
                Ok(allocate_by_weights(amount, weights))
            }
        }
    }
}

/// Largest-remainder split of a non-negative `total` by positive-sum weights.
fn allocate_by_weights(total: Decimal, weights: &MonthlyVector) -> MonthlyVector {
    let unit = Decimal::new(1, INTERNAL_DECIMAL_PLACES);
    let weight_sum: Decimal = weights.iter().copied().sum();

    let total_rounded =
        total.round_dp_with_strategy(INTERNAL_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);

    let exact: Vec<Decimal> = weights
        .iter()
        .map(|w| total_rounded * *w / weight_sum)
        .collect();

    let mut rounded = [Decimal::ZERO; MONTHS];
    for (slot, share) in rounded.iter_mut().zip(&exact) {
        *slot = share.round_dp_with_strategy(INTERNAL_DECIMAL_PLACES, RoundingStrategy::ToZero);
    }

    let remainder = total_rounded - rounded.iter().copied().sum::<Decimal>();
    let units_to_distribute = (remainder / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_usize()
        .unwrap_or(0);

    if units_to_distribute == 0 {
        return rounded;
    }

    let mut remainders: Vec<(usize, Decimal)> = exact
        .iter()
        .zip(rounded.iter())
        .enumerate()
        .map(|(i, (e, r))| (i, *e - *r))
        .collect();

    // Stable sort: ties keep calendar order.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    for (idx, _) in remainders.iter().take(units_to_distribute) {
        rounded[*idx] += unit;
    }

    rounded
}
