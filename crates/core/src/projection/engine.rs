//! Closed-form multi-year projection.
//!
//! For year offset `i` (1-based from the base year):
//!
//! ```text
//! income_i   = base_income   * (1 + (growth + inflation) / 100)^i
//! expenses_i = base_expenses * (1 + inflation / 100)^i
//! net_i      = income_i - expenses_i
//! ```
//!
//! Expenses follow inflation alone; only income carries the scenario growth.

use rust_decimal::{Decimal, MathematicalOps};
use tracing::debug;

use super::error::ProjectionError;
use super::types::{MAX_PROJECTION_YEARS, Projection, ProjectionParams};
use crate::summary::AnnualSummary;

/// Projection engine.
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Projects `params.years` years after `base.year()`.
    ///
    /// Each year is computed directly from the base with exact decimal
    /// exponentiation, not by iterating on the previous year. `years = 0`
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// - `InvalidBaseSummary` when base income or expenses are negative.
    /// - `InvalidHorizon` when `years` exceeds [`MAX_PROJECTION_YEARS`].
    /// - `InvalidInflationRate` when inflation is outside (-100, 100] or the
    ///   combined income rate falls below -100%.
    /// - `Overflow` when a compounded value does not fit in a decimal.
    pub fn project(
        base: &AnnualSummary,
        params: &ProjectionParams,
    ) -> Result<Vec<Projection>, ProjectionError> {
        Self::validate(base, params)?;

        let inflation = params.inflation_rate_pct;
        let income_factor =
            Decimal::ONE + (params.scenario.growth_rate_pct() + inflation) / Decimal::ONE_HUNDRED;
        let expense_factor = Decimal::ONE + inflation / Decimal::ONE_HUNDRED;

        let projections = (1..=params.years)
            .map(|offset| {
                let income = Self::compound(base.income(), income_factor, offset)?;
                let expenses = Self::compound(base.expenses(), expense_factor, offset)?;
                let year = i32::try_from(offset)
                    .ok()
                    .and_then(|o| base.year().checked_add(o))
                    .ok_or(ProjectionError::Overflow(offset))?;
                Ok(Projection {
                    year,
                    income,
                    expenses,
                    net: income - expenses,
                    scenario: params.scenario,
                    inflation_rate_pct: inflation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            base_year = base.year(),
            scenario = %params.scenario,
            inflation = %inflation,
            years = params.years,
            "Projection computed"
        );

        Ok(projections)
    }

    fn validate(base: &AnnualSummary, params: &ProjectionParams) -> Result<(), ProjectionError> {
        let negative = |value: Decimal| value.is_sign_negative() && !value.is_zero();
        if negative(base.income()) || negative(base.expenses()) {
            return Err(ProjectionError::InvalidBaseSummary {
                income: base.income(),
                expenses: base.expenses(),
            });
        }

        if params.years > MAX_PROJECTION_YEARS {
            return Err(ProjectionError::InvalidHorizon {
                years: params.years,
                max: MAX_PROJECTION_YEARS,
            });
        }

        let inflation = params.inflation_rate_pct;
        let hundred = Decimal::ONE_HUNDRED;
        if inflation <= -hundred
            || inflation > hundred
            || params.scenario.growth_rate_pct() + inflation < -hundred
        {
            return Err(ProjectionError::InvalidInflationRate(inflation));
        }

        Ok(())
    }

    fn compound(base: Decimal, factor: Decimal, offset: u32) -> Result<Decimal, ProjectionError> {
        if base.is_zero() {
            return Ok(Decimal::ZERO);
        }
        factor
            .checked_powu(u64::from(offset))
            .and_then(|growth| base.checked_mul(growth))
            .ok_or(ProjectionError::Overflow(offset))
    }
}
