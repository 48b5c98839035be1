//! Deterministic stand-in for a bookkeeping feed.
//!
//! Each projected month is perturbed by a deviation drawn uniformly from
//! `[-variance_pct, +variance_pct]` (in basis points) with a seeded RNG, and
//! the result is booked to the cent. Same seed, same inputs, same feed.

use std::collections::BTreeMap;

use parkfin_shared::types::{CategoryId, round_currency};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::provider::ActualsProvider;
use super::types::ActualEntry;
use crate::budget::{Budget, BudgetLine, BudgetScope, BudgetService};
use crate::{MONTHS, MonthlyVector};

/// Synthetic actuals derived from the projections of the budget in force.
#[derive(Debug, Clone)]
pub struct SyntheticActuals {
    seed: u64,
    variance_bps: i64,
    budgets: Vec<Budget>,
    lines: Vec<BudgetLine>,
}

impl SyntheticActuals {
    /// Creates a feed over the given budgets and lines.
    ///
    /// `variance_pct` is clamped to `0..=100`.
    #[must_use]
    pub fn new(
        seed: u64,
        variance_pct: Decimal,
        budgets: Vec<Budget>,
        lines: Vec<BudgetLine>,
    ) -> Self {
        let variance_bps = (variance_pct * Decimal::ONE_HUNDRED)
            .trunc()
            .to_i64()
            .unwrap_or(0)
            .clamp(0, 10_000);
        Self {
            seed,
            variance_bps,
            budgets,
            lines,
        }
    }

    fn seed_for(&self, year: i32, scope: BudgetScope) -> u64 {
        let scope_bits = match scope {
            BudgetScope::Municipal => 0,
            BudgetScope::Park(id) => id.into_inner().as_u64_pair().0,
        };
        self.seed ^ u64::from(year.unsigned_abs()).rotate_left(32) ^ scope_bits
    }

    fn projected_by_category(&self, budget: &Budget) -> BTreeMap<CategoryId, MonthlyVector> {
        let mut projected: BTreeMap<CategoryId, MonthlyVector> = BTreeMap::new();
        for line in BudgetService::lines_of(budget.id, &self.lines) {
            let months = projected
                .entry(line.category_id())
                .or_insert([Decimal::ZERO; MONTHS]);
            for (total, month) in months.iter_mut().zip(line.monthly()) {
                *total += *month;
            }
        }
        projected
    }
}

impl ActualsProvider for SyntheticActuals {
    fn actuals(&self, year: i32, scope: BudgetScope) -> Vec<ActualEntry> {
        let Some(budget) = BudgetService::select_effective(&self.budgets, year, scope) else {
            return Vec::new();
        };

        let mut rng = StdRng::seed_from_u64(self.seed_for(year, scope));
        let mut entries = Vec::new();

        for (category_id, months) in self.projected_by_category(budget) {
            for (index, projected) in months.iter().enumerate() {
                let deviation_bps = rng.random_range(-self.variance_bps..=self.variance_bps);
                if projected.is_zero() {
                    continue;
                }
                let factor = Decimal::ONE + Decimal::new(deviation_bps, 4);
                entries.push(
                    ActualEntry::new(
                        category_id,
                        year,
                        u8::try_from(index + 1).unwrap_or(u8::MAX),
                        round_currency(*projected * factor),
                    )
                    .with_scope(scope),
                );
            }
        }

        entries
    }
}
