//! Cash-flow matrix and summary route.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use parkfin_core::budget::BudgetScope;
use parkfin_core::cashflow::{CashFlowReport, CashFlowService, CategoryFlow, VarianceDirection};
use parkfin_core::catalog::{CategoryCatalog, CategoryHierarchy, CategoryType};
use parkfin_core::summary::{AnnualSummary, CashFlowSummary, FlowSeries, FlowVariance};
use parkfin_shared::types::{BudgetId, CategoryId, ParkId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;
use crate::error::ApiResult;
use crate::format::{money, money_months, percent, percent_months};

/// Creates the cash-flow routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/cash-flow/{year}", get(get_cash_flow))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Scope selector shared by query strings.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    /// Park to scope to; municipal when absent.
    pub park_id: Option<ParkId>,
}

impl ScopeQuery {
    /// Scope selected by the query.
    #[must_use]
    pub fn scope(&self) -> BudgetScope {
        self.park_id.map_or(BudgetScope::Municipal, BudgetScope::Park)
    }
}

/// One category row of the matrix.
#[derive(Debug, Serialize)]
pub struct CategoryFlowResponse {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// Planned per month.
    pub projected: Vec<String>,
    /// Realized per month.
    pub real: Vec<String>,
    /// Variance per month.
    pub variance_pct: Vec<String>,
    /// Planned for the year.
    pub annual_projected: String,
    /// Realized for the year.
    pub annual_real: String,
    /// Variance of the annual sums.
    pub annual_variance_pct: String,
    /// Favorable, unfavorable or on target.
    pub direction: VarianceDirection,
}

impl From<&CategoryFlow> for CategoryFlowResponse {
    fn from(row: &CategoryFlow) -> Self {
        Self {
            category_id: row.category_id,
            name: row.name.clone(),
            category_type: row.category_type,
            projected: money_months(&row.projected),
            real: money_months(&row.real),
            variance_pct: percent_months(&row.variance_pct),
            annual_projected: money(row.annual_projected),
            annual_real: money(row.annual_real),
            annual_variance_pct: percent(row.annual_variance_pct),
            direction: row.direction,
        }
    }
}

/// Monthly income, expenses and net.
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    /// Income per month.
    pub income: Vec<String>,
    /// Expenses per month.
    pub expenses: Vec<String>,
    /// Net per month.
    pub net: Vec<String>,
}

impl From<&FlowSeries> for SeriesResponse {
    fn from(series: &FlowSeries) -> Self {
        Self {
            income: money_months(&series.income),
            expenses: money_months(&series.expenses),
            net: money_months(&series.net),
        }
    }
}

/// Annual income, expenses and net.
#[derive(Debug, Serialize)]
pub struct AnnualResponse {
    /// Income.
    pub income: String,
    /// Expenses.
    pub expenses: String,
    /// Net.
    pub net: String,
}

impl From<AnnualSummary> for AnnualResponse {
    fn from(summary: AnnualSummary) -> Self {
        Self {
            income: money(summary.income()),
            expenses: money(summary.expenses()),
            net: money(summary.net()),
        }
    }
}

/// Variance of income, expenses and net.
#[derive(Debug, Serialize)]
pub struct VarianceResponse {
    /// Income variance.
    pub income_pct: String,
    /// Expense variance.
    pub expenses_pct: String,
    /// Net variance.
    pub net_pct: String,
}

impl From<&FlowVariance> for VarianceResponse {
    fn from(variance: &FlowVariance) -> Self {
        Self {
            income_pct: percent(variance.income_pct),
            expenses_pct: percent(variance.expenses_pct),
            net_pct: percent(variance.net_pct),
        }
    }
}

/// Summary block.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Planned per month.
    pub projected_monthly: SeriesResponse,
    /// Realized per month.
    pub real_monthly: SeriesResponse,
    /// Variance per month.
    pub monthly_variance: Vec<VarianceResponse>,
    /// Planned for the year.
    pub projected_annual: AnnualResponse,
    /// Realized for the year.
    pub real_annual: AnnualResponse,
    /// Variance of the annual totals.
    pub annual_variance: VarianceResponse,
}

impl From<&CashFlowSummary> for SummaryResponse {
    fn from(summary: &CashFlowSummary) -> Self {
        Self {
            projected_monthly: (&summary.projected_monthly).into(),
            real_monthly: (&summary.real_monthly).into(),
            monthly_variance: summary.monthly_variance.iter().map(Into::into).collect(),
            projected_annual: summary.projected_annual.into(),
            real_annual: summary.real_annual.into(),
            annual_variance: (&summary.annual_variance).into(),
        }
    }
}

/// Annual totals rolled up to a top-level category.
#[derive(Debug, Serialize)]
pub struct RollUpResponse {
    /// Root category ID.
    pub category_id: CategoryId,
    /// Root category name.
    pub name: String,
    /// Planned for the year, including descendants.
    pub projected: String,
    /// Realized for the year, including descendants.
    pub real: String,
}

/// Response for the cash-flow route.
#[derive(Debug, Serialize)]
pub struct CashFlowResponse {
    /// Year covered.
    pub year: i32,
    /// Scope covered.
    pub scope: BudgetScope,
    /// Budget that supplied the projections.
    pub budget_id: Option<BudgetId>,
    /// Matrix rows.
    pub categories: Vec<CategoryFlowResponse>,
    /// Roll-up of the matrix.
    pub summary: SummaryResponse,
    /// Annual totals by root category.
    pub roll_up: Vec<RollUpResponse>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn roll_up(
    report: &CashFlowReport,
    catalog: &CategoryCatalog,
    hierarchy: &CategoryHierarchy,
) -> Vec<RollUpResponse> {
    let rows = &report.matrix.rows;
    let projected = hierarchy.roll_up(rows.iter().map(|r| (r.category_id, r.annual_projected)));
    let real = hierarchy.roll_up(rows.iter().map(|r| (r.category_id, r.annual_real)));

    projected
        .into_iter()
        .map(|(category_id, amount)| RollUpResponse {
            category_id,
            name: catalog
                .get(category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            projected: money(amount),
            real: money(real.get(&category_id).copied().unwrap_or_default()),
        })
        .collect()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/cash-flow/{year}` - Matrix and summary for a year and scope.
async fn get_cash_flow(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<CashFlowResponse>> {
    let scope = query.scope();
    let snapshot = state.store.snapshot().await;
    let actuals = state.actuals_provider(&snapshot);

    let report = CashFlowService::report(
        year,
        scope,
        &snapshot.catalog,
        &snapshot.budgets,
        &snapshot.lines,
        actuals.as_ref(),
    )?;

    info!(
        year,
        scope = %scope,
        budget_id = ?report.budget_id,
        rows = report.matrix.rows.len(),
        "Cash-flow report served"
    );

    Ok(Json(CashFlowResponse {
        year,
        scope,
        budget_id: report.budget_id,
        categories: report.matrix.rows.iter().map(Into::into).collect(),
        summary: (&report.summary).into(),
        roll_up: roll_up(&report, &snapshot.catalog, &snapshot.hierarchy),
    }))
}
