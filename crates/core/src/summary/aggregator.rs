//! Rolls a cash-flow matrix up into income, expense and net series.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{CashFlowSummary, FlowSeries, FlowVariance};
use crate::cashflow::variance::{net_variance_pct, variance_pct};
use crate::cashflow::{CashFlowMatrix, CategoryFlow};
use crate::catalog::CategoryType;
use crate::{MONTHS, MonthlyVector};

/// Aggregator over the matrix builder's output.
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Summarizes a matrix.
    ///
    /// Rows are partitioned by category type before summing. Net is derived
    /// per series; net variance is computed from projected and real net
    /// directly, never from the income and expense variances.
    #[must_use]
    pub fn summarize(matrix: &CashFlowMatrix) -> CashFlowSummary {
        let projected = FlowSeries::new(
            Self::sum_rows(matrix, CategoryType::Income, |r| &r.projected),
            Self::sum_rows(matrix, CategoryType::Expense, |r| &r.projected),
        );
        let real = FlowSeries::new(
            Self::sum_rows(matrix, CategoryType::Income, |r| &r.real),
            Self::sum_rows(matrix, CategoryType::Expense, |r| &r.real),
        );

        let monthly_variance = (0..MONTHS)
            .map(|m| FlowVariance {
                income_pct: variance_pct(projected.income[m], real.income[m]),
                expenses_pct: variance_pct(projected.expenses[m], real.expenses[m]),
                net_pct: net_variance_pct(projected.net[m], real.net[m]),
            })
            .collect();

        let projected_annual = projected.annual(matrix.year);
        let real_annual = real.annual(matrix.year);
        let annual_variance = FlowVariance {
            income_pct: variance_pct(projected_annual.income(), real_annual.income()),
            expenses_pct: variance_pct(projected_annual.expenses(), real_annual.expenses()),
            net_pct: net_variance_pct(projected_annual.net(), real_annual.net()),
        };

        debug!(
            year = matrix.year,
            scope = %matrix.scope,
            projected_net = %projected_annual.net(),
            real_net = %real_annual.net(),
            "Cash-flow summary computed"
        );

        CashFlowSummary {
            year: matrix.year,
            scope: matrix.scope,
            projected_monthly: projected,
            real_monthly: real,
            projected_annual,
            real_annual,
            monthly_variance,
            annual_variance,
        }
    }

    fn sum_rows(
        matrix: &CashFlowMatrix,
        category_type: CategoryType,
        series: impl Fn(&CategoryFlow) -> &MonthlyVector,
    ) -> MonthlyVector {
        let mut totals = [Decimal::ZERO; MONTHS];
        for row in matrix.rows_of_type(category_type) {
            for (total, amount) in totals.iter_mut().zip(series(row)) {
                *total += *amount;
            }
        }
        totals
    }
}
