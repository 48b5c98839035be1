//! Property-based and boundary tests for the projection engine.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::ProjectionEngine;
use super::error::ProjectionError;
use super::scenario::Scenario;
use super::types::{MAX_PROJECTION_YEARS, ProjectionParams};
use crate::summary::AnnualSummary;

fn params(scenario: Scenario, inflation: Decimal, years: u32) -> ProjectionParams {
    ProjectionParams {
        scenario,
        inflation_rate_pct: inflation,
        years,
    }
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn inflation_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

proptest! {
    /// Optimistic income rises every year for positive income and non-negative inflation.
    #[test]
    fn prop_optimistic_income_strictly_increasing(
        income in amount_strategy(),
        inflation in inflation_strategy(),
        years in 2u32..30,
    ) {
        let base = AnnualSummary::new(2025, income, Decimal::ZERO);
        let projections =
            ProjectionEngine::project(&base, &params(Scenario::Optimistic, inflation, years)).unwrap();

        prop_assert_eq!(projections.len(), years as usize);
        prop_assert!(projections[0].income > income);
        for pair in projections.windows(2) {
            prop_assert!(pair[1].income > pair[0].income);
        }
    }

    /// Net is income minus expenses in every projected year.
    #[test]
    fn prop_projected_net_consistency(
        income in amount_strategy(),
        expenses in amount_strategy(),
        inflation in inflation_strategy(),
        scenario in prop::sample::select(Scenario::ALL.to_vec()),
    ) {
        let base = AnnualSummary::new(2025, income, expenses);
        let projections =
            ProjectionEngine::project(&base, &params(scenario, inflation, 5)).unwrap();
        for (offset, p) in projections.iter().enumerate() {
            prop_assert_eq!(p.net, p.income - p.expenses);
            prop_assert_eq!(p.year, 2026 + i32::try_from(offset).unwrap());
        }
    }

    /// Zero bases stay zero whatever the scenario.
    #[test]
    fn prop_zero_base_stays_zero(
        inflation in inflation_strategy(),
        scenario in prop::sample::select(Scenario::ALL.to_vec()),
        years in 0u32..50,
    ) {
        let base = AnnualSummary::new(2025, Decimal::ZERO, Decimal::ZERO);
        let projections = ProjectionEngine::project(&base, &params(scenario, inflation, years)).unwrap();
        prop_assert!(projections.iter().all(|p| p.income.is_zero() && p.expenses.is_zero()));
    }
}

#[test]
fn test_realistic_one_year() {
    let base = AnnualSummary::new(2025, dec!(1000000), dec!(800000));
    let projections =
        ProjectionEngine::project(&base, &params(Scenario::Realistic, dec!(3.5), 1)).unwrap();

    assert_eq!(projections.len(), 1);
    let first = projections[0];
    assert_eq!(first.year, 2026);
    assert_eq!(first.income, dec!(1115000));
    assert_eq!(first.expenses, dec!(828000));
    assert_eq!(first.net, dec!(287000));
    assert_eq!(first.scenario, Scenario::Realistic);
    assert_eq!(first.inflation_rate_pct, dec!(3.5));
}

#[test]
fn test_uses_exact_compounding() {
    let base = AnnualSummary::new(2025, dec!(1000), dec!(1000));
    let projections =
        ProjectionEngine::project(&base, &params(Scenario::Optimistic, dec!(5), 3)).unwrap();

    // 1000 * 1.2^3 and 1000 * 1.05^3
    assert_eq!(projections[2].income, dec!(1728));
    assert_eq!(projections[2].expenses, dec!(1157.625));
}

#[test]
fn test_expenses_ignore_scenario() {
    let base = AnnualSummary::new(2025, dec!(500), dec!(400));
    let optimistic =
        ProjectionEngine::project(&base, &params(Scenario::Optimistic, dec!(2), 4)).unwrap();
    let pessimistic =
        ProjectionEngine::project(&base, &params(Scenario::Pessimistic, dec!(2), 4)).unwrap();

    for (a, b) in optimistic.iter().zip(&pessimistic) {
        assert_eq!(a.expenses, b.expenses);
        assert!(a.income > b.income);
    }
}

#[test]
fn test_pessimistic_margin_compression() {
    let base = AnnualSummary::new(2025, dec!(1000), dec!(900));
    let projections =
        ProjectionEngine::project(&base, &params(Scenario::Pessimistic, dec!(3), 3)).unwrap();

    // income factor 0.98, expense factor 1.03
    assert_eq!(projections[0].income, dec!(980));
    assert_eq!(projections[0].expenses, dec!(927));
    assert!(projections[2].net < Decimal::ZERO);
}

#[rstest]
#[case(dec!(-1), dec!(10))]
#[case(dec!(10), dec!(-0.01))]
fn test_negative_base_rejected(#[case] income: Decimal, #[case] expenses: Decimal) {
    let base = AnnualSummary::new(2025, income, expenses);
    assert_eq!(
        ProjectionEngine::project(&base, &ProjectionParams::default()).unwrap_err(),
        ProjectionError::InvalidBaseSummary { income, expenses }
    );
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(MAX_PROJECTION_YEARS, 100)]
fn test_horizon_boundaries(#[case] years: u32, #[case] expected: usize) {
    let base = AnnualSummary::new(2025, dec!(1000), dec!(800));
    let projections =
        ProjectionEngine::project(&base, &params(Scenario::Realistic, Decimal::ZERO, years))
            .unwrap();
    assert_eq!(projections.len(), expected);
}

#[test]
fn test_horizon_too_long() {
    let base = AnnualSummary::new(2025, dec!(1000), dec!(800));
    assert_eq!(
        ProjectionEngine::project(&base, &params(Scenario::Realistic, Decimal::ZERO, 101))
            .unwrap_err(),
        ProjectionError::InvalidHorizon {
            years: 101,
            max: MAX_PROJECTION_YEARS,
        }
    );
}

#[rstest]
#[case(Scenario::Realistic, dec!(-100))]
#[case(Scenario::Realistic, dec!(100.01))]
#[case(Scenario::Pessimistic, dec!(-99))]
fn test_inflation_out_of_range(#[case] scenario: Scenario, #[case] inflation: Decimal) {
    let base = AnnualSummary::new(2025, dec!(1000), dec!(800));
    assert_eq!(
        ProjectionEngine::project(&base, &params(scenario, inflation, 1)).unwrap_err(),
        ProjectionError::InvalidInflationRate(inflation)
    );
}

#[test]
fn test_overflow_reported() {
    let base = AnnualSummary::new(2025, dec!(1000000000), dec!(1));
    let result = ProjectionEngine::project(&base, &params(Scenario::Optimistic, dec!(100), 100));
    assert!(matches!(result, Err(ProjectionError::Overflow(_))));
}

#[test]
fn test_bit_reproducible() {
    let base = AnnualSummary::new(2025, dec!(123456.78), dec!(98765.43));
    let p = params(Scenario::Optimistic, dec!(2.75), 10);
    assert_eq!(
        ProjectionEngine::project(&base, &p).unwrap(),
        ProjectionEngine::project(&base, &p).unwrap()
    );
}
