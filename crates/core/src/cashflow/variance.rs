//! Projected vs real variance.
//!
//! `variance_pct = (real - projected) / projected * 100`, with two named
//! zero-denominator branches instead of NaN or infinity:
//! - nothing planned, nothing realized: 0
//! - nothing planned, something realized: 100
//!
//! A relative deviation too large for a `Decimal` saturates to
//! `Decimal::MAX` or `Decimal::MIN`, following the sign of `real - projected`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryType;

/// Variance reported when nothing was planned but money moved.
pub const UNPLANNED_VARIANCE_PCT: Decimal = Decimal::ONE_HUNDRED;

/// Which branch of the variance formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceCase {
    /// Projected and real are both zero.
    NoActivity,
    /// Projected is zero, real is not.
    Unplanned,
    /// Projected is non-zero; the ratio is defined.
    Relative,
}

impl VarianceCase {
    /// Classifies a projected/real pair.
    #[must_use]
    pub fn classify(projected: Decimal, real: Decimal) -> Self {
        match (projected.is_zero(), real.is_zero()) {
            (true, true) => Self::NoActivity,
            (true, false) => Self::Unplanned,
            (false, _) => Self::Relative,
        }
    }
}

/// Variance of a non-negative projected series (category or income/expense totals).
#[must_use]
pub fn variance_pct(projected: Decimal, real: Decimal) -> Decimal {
    match VarianceCase::classify(projected, real) {
        VarianceCase::NoActivity => Decimal::ZERO,
        VarianceCase::Unplanned => UNPLANNED_VARIANCE_PCT,
        VarianceCase::Relative => relative_pct(projected, real, projected),
    }
}

/// Variance of a net series, which can be negative.
///
/// The denominator is `|projected_net|`, so a result above zero always means
/// the real net came out better than planned. Dividing by a negative
/// projected net would flip the sign and report an improvement as a loss.
#[must_use]
pub fn net_variance_pct(projected_net: Decimal, real_net: Decimal) -> Decimal {
    match VarianceCase::classify(projected_net, real_net) {
        VarianceCase::NoActivity => Decimal::ZERO,
        VarianceCase::Unplanned => UNPLANNED_VARIANCE_PCT,
        VarianceCase::Relative => relative_pct(projected_net, real_net, projected_net.abs()),
    }
}

/// `(real - projected) / denominator * 100`, saturated on overflow.
fn relative_pct(projected: Decimal, real: Decimal, denominator: Decimal) -> Decimal {
    real.checked_sub(projected)
        .and_then(|deviation| deviation.checked_div(denominator))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| saturated_pct(real > projected))
}

fn saturated_pct(above_plan: bool) -> Decimal {
    if above_plan { Decimal::MAX } else { Decimal::MIN }
}

/// Whether a deviation helps or hurts, given the category type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceDirection {
    /// More income or less spending than planned.
    Favorable,
    /// Less income or more spending than planned.
    Unfavorable,
    /// Exactly on plan.
    OnTarget,
}

impl VarianceDirection {
    /// For income: real above projected is favorable.
    /// For expenses: real below projected is favorable.
    #[must_use]
    pub fn of(category_type: CategoryType, projected: Decimal, real: Decimal) -> Self {
        let gain = match category_type {
            CategoryType::Income => real - projected,
            CategoryType::Expense => projected - real,
        };
        match gain.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::Favorable,
            std::cmp::Ordering::Less => Self::Unfavorable,
            std::cmp::Ordering::Equal => Self::OnTarget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), dec!(0), dec!(0))]
    #[case(dec!(0), dec!(250), dec!(100))]
    #[case(dec!(10000), dec!(12000), dec!(20))]
    #[case(dec!(10000), dec!(8000), dec!(-20))]
    #[case(dec!(10000), dec!(0), dec!(-100))]
    #[case(dec!(500), dec!(500), dec!(0))]
    fn test_variance_branches(
        #[case] projected: Decimal,
        #[case] real: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(variance_pct(projected, real), expected);
    }

    #[rstest]
    // planned loss of 1000, real loss of 500: half the loss, +50%
    #[case(dec!(-1000), dec!(-500), dec!(50))]
    // planned loss of 1000, real loss of 1500: -50%
    #[case(dec!(-1000), dec!(-1500), dec!(-50))]
    #[case(dec!(2000), dec!(2500), dec!(25))]
    #[case(dec!(0), dec!(-40), dec!(100))]
    #[case(dec!(0), dec!(0), dec!(0))]
    fn test_net_variance_uses_absolute_denominator(
        #[case] projected: Decimal,
        #[case] real: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(net_variance_pct(projected, real), expected);
    }

    #[test]
    fn test_variance_saturates_on_tiny_projection() {
        let tiny = Decimal::new(1, 10);
        let huge = dec!(1000000000000000000);
        assert_eq!(variance_pct(tiny, huge), Decimal::MAX);
        // -100% is the floor for a non-negative real
        let shortfall = variance_pct(huge, tiny);
        assert!(shortfall > dec!(-100) && shortfall < dec!(-99.9));
    }

    #[test]
    fn test_net_variance_saturates_both_ways() {
        let tiny = Decimal::new(1, 10);
        let huge = dec!(1000000000000000000);
        assert_eq!(net_variance_pct(-tiny, huge), Decimal::MAX);
        assert_eq!(net_variance_pct(tiny, -huge), Decimal::MIN);
        assert_eq!(net_variance_pct(-Decimal::MAX, Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_direction_by_category_type() {
        assert_eq!(
            VarianceDirection::of(CategoryType::Income, dec!(100), dec!(120)),
            VarianceDirection::Favorable
        );
        assert_eq!(
            VarianceDirection::of(CategoryType::Expense, dec!(100), dec!(120)),
            VarianceDirection::Unfavorable
        );
        assert_eq!(
            VarianceDirection::of(CategoryType::Expense, dec!(100), dec!(80)),
            VarianceDirection::Favorable
        );
        assert_eq!(
            VarianceDirection::of(CategoryType::Income, dec!(100), dec!(100)),
            VarianceDirection::OnTarget
        );
    }
}
