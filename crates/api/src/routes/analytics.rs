//! Budget analytics route.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use parkfin_core::analytics::{BudgetAnalytics, CategoryShare, Recommendation, Severity};
use parkfin_shared::types::BudgetId;
use parkfin_store::{BudgetRepository, CatalogRepository};
use serde::Serialize;
use tracing::debug;

use crate::AppState;
use crate::error::ApiResult;
use crate::format::{RatioResponse, money, percent};

/// Creates analytics routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/budgets/{budget_id}/analytics", get(get_analytics))
}

/// One category's share of a total.
#[derive(Debug, Serialize)]
pub struct CategoryShareResponse {
    /// Category name.
    pub category: String,
    /// Summed projected amount.
    pub amount: String,
    /// Percentage of the total.
    pub share_pct: String,
}

impl From<CategoryShare> for CategoryShareResponse {
    fn from(share: CategoryShare) -> Self {
        Self {
            category: share.category,
            amount: money(share.amount),
            share_pct: percent(share.share_pct),
        }
    }
}

/// Response for the analytics route.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Budget analyzed.
    pub budget_id: BudgetId,
    /// Total projected income.
    pub total_income: String,
    /// Total projected expenses.
    pub total_expenses: String,
    /// Income minus expenses.
    pub net: String,
    /// Profit margin in percent.
    pub profit_margin_pct: RatioResponse,
    /// Income divided by expenses.
    pub income_to_expense_ratio: RatioResponse,
    /// Income by category, largest first.
    pub income_by_category: Vec<CategoryShareResponse>,
    /// Expenses by category, largest first.
    pub expense_by_category: Vec<CategoryShareResponse>,
    /// Applicable recommendations.
    pub recommendations: Vec<Recommendation>,
    /// Overall severity.
    pub severity: Severity,
}

/// GET `/budgets/{budget_id}/analytics` - Ratios, shares and recommendations.
async fn get_analytics(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let (budget, lines) = BudgetRepository::new(state.store.clone())
        .get_budget_with_lines(budget_id)
        .await?;
    let catalog = CatalogRepository::new(state.store.clone()).catalog().await;

    let analysis = BudgetAnalytics::analyze_budget(&budget, &lines, &catalog)?;
    debug!(budget_id = %budget_id, severity = ?analysis.severity, "Analytics served");

    Ok(Json(AnalyticsResponse {
        budget_id,
        total_income: money(analysis.total_income),
        total_expenses: money(analysis.total_expenses),
        net: money(analysis.net),
        profit_margin_pct: analysis.profit_margin_pct.into(),
        income_to_expense_ratio: analysis.income_to_expense_ratio.into(),
        income_by_category: analysis
            .income_by_category
            .into_iter()
            .map(Into::into)
            .collect(),
        expense_by_category: analysis
            .expense_by_category
            .into_iter()
            .map(Into::into)
            .collect(),
        recommendations: analysis.recommendations,
        severity: analysis.severity,
    }))
}
