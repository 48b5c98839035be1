//! Cash-flow report for one year and scope.

use parkfin_shared::types::BudgetId;
use serde::Serialize;
use tracing::{debug, warn};

use super::builder::CashFlowMatrixBuilder;
use super::error::CashFlowError;
use super::types::CashFlowMatrix;
use crate::actuals::ActualsProvider;
use crate::budget::{Budget, BudgetLine, BudgetScope, BudgetService};
use crate::catalog::CategoryCatalog;
use crate::summary::{CashFlowSummary, SummaryAggregator};

/// Matrix and summary computed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowReport {
    /// Year covered.
    pub year: i32,
    /// Scope covered.
    pub scope: BudgetScope,
    /// Budget whose lines supplied the projections, if any.
    pub budget_id: Option<BudgetId>,
    /// Per-category matrix.
    pub matrix: CashFlowMatrix,
    /// Roll-up of the matrix.
    pub summary: CashFlowSummary,
}

/// Cash-flow service: select budget, build matrix, summarize.
pub struct CashFlowService;

impl CashFlowService {
    /// Builds the report for a year and scope.
    ///
    /// Projections come from the effective budget for the year and scope
    /// (see [`BudgetService::select_effective`]). Without one, every
    /// projected value is zero and only actuals show.
    ///
    /// # Errors
    ///
    /// Propagates [`CashFlowError`] from the matrix builder.
    pub fn report(
        year: i32,
        scope: BudgetScope,
        catalog: &CategoryCatalog,
        budgets: &[Budget],
        lines: &[BudgetLine],
        actuals: &dyn ActualsProvider,
    ) -> Result<CashFlowReport, CashFlowError> {
        let budget = BudgetService::select_effective(budgets, year, scope);
        Self::compute(year, scope, budget, catalog, lines, actuals)
    }

    /// Builds the report for one budget's year and scope, using that
    /// budget's lines whether or not it is the effective one.
    ///
    /// # Errors
    ///
    /// Propagates [`CashFlowError`] from the matrix builder.
    pub fn report_for_budget(
        budget: &Budget,
        catalog: &CategoryCatalog,
        lines: &[BudgetLine],
        actuals: &dyn ActualsProvider,
    ) -> Result<CashFlowReport, CashFlowError> {
        Self::compute(budget.year, budget.scope, Some(budget), catalog, lines, actuals)
    }

    fn compute(
        year: i32,
        scope: BudgetScope,
        budget: Option<&Budget>,
        catalog: &CategoryCatalog,
        lines: &[BudgetLine],
        actuals: &dyn ActualsProvider,
    ) -> Result<CashFlowReport, CashFlowError> {
        let budget_lines: Vec<BudgetLine> = budget
            .map(|b| BudgetService::lines_of(b.id, lines).cloned().collect())
            .unwrap_or_default();
        let entries = actuals.actuals(year, scope);

        debug!(
            year,
            scope = %scope,
            budget_id = ?budget.map(|b| b.id),
            lines = budget_lines.len(),
            entries = entries.len(),
            "Building cash-flow report"
        );

        let matrix = CashFlowMatrixBuilder::build(year, scope, catalog, &budget_lines, &entries)
            .inspect_err(|e| warn!(year, scope = %scope, error = %e, "Cash-flow matrix rejected"))?;
        let summary = SummaryAggregator::summarize(&matrix);

        Ok(CashFlowReport {
            year,
            scope,
            budget_id: budget.map(|b| b.id),
            matrix,
            summary,
        })
    }
}
