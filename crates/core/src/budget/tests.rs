//! Property-based tests for budget lines.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use parkfin_shared::types::{BudgetId, BudgetLineId, CategoryId};

use super::distribution::DistributionPolicy;
use super::error::{BudgetError, LineDefect};
use super::types::{BudgetLine, BudgetLineInput};

/// Strategy for non-negative amounts with cents (0.00 to 10,000,000.00).
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn input(amount: Decimal, monthly: Option<Vec<Decimal>>) -> BudgetLineInput {
    BudgetLineInput {
        id: BudgetLineId::from_u128(1),
        budget_id: BudgetId::from_u128(1),
        category_id: CategoryId::from_u128(1),
        concept: "Tree maintenance".to_string(),
        projected_amount: amount,
        monthly_distribution: monthly,
        distribution: DistributionPolicy::Even,
    }
}

proptest! {
    /// Even distribution: the twelve months add back up to the projected amount.
    #[test]
    fn prop_even_distribution_sums_to_projected(amount in amount_strategy()) {
        let line = BudgetLine::new(input(amount, None)).unwrap();
        let sum: Decimal = line.monthly().iter().copied().sum();
        prop_assert!((sum - amount).abs() <= dec!(0.000001));
        prop_assert!(line.monthly().iter().all(|m| !m.is_sign_negative() || m.is_zero()));
    }

    /// Even distribution: no two months differ by more than one internal unit.
    #[test]
    fn prop_even_distribution_is_flat(amount in amount_strategy()) {
        let line = BudgetLine::new(input(amount, None)).unwrap();
        let max = line.monthly().iter().copied().max().unwrap();
        let min = line.monthly().iter().copied().min().unwrap();
        prop_assert!(max - min <= dec!(0.0000000001));
    }

    /// Seasonal weights keep the sum invariant.
    #[test]
    fn prop_seasonal_distribution_sums_to_projected(
        amount in amount_strategy(),
        weights in prop::array::uniform12(0u32..100),
    ) {
        prop_assume!(weights.iter().any(|w| *w > 0));
        let mut line_input = input(amount, None);
        line_input.distribution = DistributionPolicy::Seasonal {
            weights: weights.map(Decimal::from),
        };
        let line = BudgetLine::new(line_input).unwrap();
        let sum: Decimal = line.monthly().iter().copied().sum();
        prop_assert!((sum - amount).abs() <= dec!(0.000001));
    }

    /// Negative projected amounts are rejected at construction.
    #[test]
    fn prop_negative_amount_rejected(cents in 1i64..1_000_000_000i64) {
        let amount = Decimal::new(-cents, 2);
        let result = BudgetLine::new(input(amount, None));
        prop_assert_eq!(
            result.unwrap_err(),
            BudgetError::InvalidBudgetLine {
                line_id: BudgetLineId::from_u128(1),
                defect: LineDefect::NegativeAmount(amount),
            }
        );
    }
}

#[test]
fn test_explicit_distribution_is_kept() {
    let monthly = vec![
        dec!(0), dec!(0), dec!(500), dec!(1000), dec!(1500), dec!(2000),
        dec!(2000), dec!(2000), dec!(1000), dec!(0), dec!(0), dec!(0),
    ];
    let line = BudgetLine::new(input(dec!(10000), Some(monthly.clone()))).unwrap();
    assert!(line.has_explicit_distribution());
    assert_eq!(line.monthly().to_vec(), monthly);
}

#[test]
fn test_explicit_distribution_must_match_amount() {
    let monthly = vec![dec!(100); 12];
    let result = BudgetLine::new(input(dec!(1000), Some(monthly)));
    assert!(matches!(
        result,
        Err(BudgetError::InvalidBudgetLine {
            defect: LineDefect::DistributionMismatch { .. },
            ..
        })
    ));
}

#[test]
fn test_explicit_distribution_within_tolerance() {
    // 12 x 83.33 = 999.96: off by more than a cent
    let result = BudgetLine::new(input(dec!(1000), Some(vec![dec!(83.33); 12])));
    assert!(result.is_err());

    let mut monthly = vec![dec!(83.33); 12];
    monthly[11] = dec!(83.36);
    let line = BudgetLine::new(input(dec!(1000), Some(monthly))).unwrap();
    assert_eq!(line.monthly()[11], dec!(83.36));
}

#[test]
fn test_explicit_distribution_shape_errors() {
    let short = BudgetLine::new(input(dec!(100), Some(vec![dec!(50), dec!(50)])));
    assert!(matches!(
        short,
        Err(BudgetError::InvalidBudgetLine {
            defect: LineDefect::WrongMonthCount(2),
            ..
        })
    ));

    let mut monthly = vec![dec!(10); 12];
    monthly[0] = dec!(-10);
    monthly[1] = dec!(30);
    let negative = BudgetLine::new(input(dec!(120), Some(monthly)));
    assert!(matches!(
        negative,
        Err(BudgetError::InvalidBudgetLine {
            defect: LineDefect::NegativeMonth { month: 1, .. },
            ..
        })
    ));
}

#[test]
fn test_line_deserialization_validates() {
    let valid = r#"{
        "id": "00000000-0000-0000-0000-000000000001",
        "budget_id": "00000000-0000-0000-0000-000000000002",
        "category_id": "00000000-0000-0000-0000-000000000003",
        "concept": "Donations",
        "projected_amount": "120000"
    }"#;
    let line: BudgetLine = serde_json::from_str(valid).unwrap();
    assert_eq!(line.monthly()[0], dec!(10000));

    let invalid = valid.replace("\"120000\"", "\"-5\"");
    assert!(serde_json::from_str::<BudgetLine>(&invalid).is_err());
}

#[test]
fn test_line_serializes_without_derived_vector() {
    let line = BudgetLine::new(input(dec!(1200), None)).unwrap();
    let json = serde_json::to_value(&line).unwrap();
    assert!(json.get("monthly_distribution").is_none());
    assert_eq!(json["distribution"]["policy"], "even");
}
