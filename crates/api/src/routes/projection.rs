//! Multi-year projection route.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use parkfin_core::cashflow::CashFlowService;
use parkfin_core::projection::{
    Projection, ProjectionBasis, ProjectionEngine, ProjectionParams, Scenario,
};
use parkfin_shared::AppError;
use parkfin_shared::types::BudgetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::cash_flow::AnnualResponse;
use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::format::{money, percent};

/// Creates projection routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/budgets/{budget_id}/projection", get(get_projection))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters; absent values fall back to configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectionQuery {
    /// `optimistic`, `realistic` or `pessimistic`.
    pub scenario: Option<String>,
    /// Annual inflation in percent.
    pub inflation_rate: Option<String>,
    /// Number of years to project.
    pub years: Option<u32>,
    /// Which annual totals seed the projection.
    pub basis: Option<ProjectionBasis>,
}

/// One projected year.
#[derive(Debug, Serialize)]
pub struct ProjectionYearResponse {
    /// Calendar year.
    pub year: i32,
    /// Projected income.
    pub income: String,
    /// Projected expenses.
    pub expenses: String,
    /// Projected net.
    pub net: String,
}

impl From<&Projection> for ProjectionYearResponse {
    fn from(projection: &Projection) -> Self {
        Self {
            year: projection.year,
            income: money(projection.income),
            expenses: money(projection.expenses),
            net: money(projection.net),
        }
    }
}

/// Response for the projection route.
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    /// Budget projected.
    pub budget_id: BudgetId,
    /// Year the projection starts from.
    pub base_year: i32,
    /// Totals the projection starts from.
    pub base: AnnualResponse,
    /// Which totals were used.
    pub basis: ProjectionBasis,
    /// Scenario applied.
    pub scenario: Scenario,
    /// Inflation applied, in percent.
    pub inflation_rate_pct: String,
    /// One entry per projected year.
    pub projections: Vec<ProjectionYearResponse>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn params(state: &AppState, query: &ProjectionQuery) -> Result<ProjectionParams, ApiError> {
    let defaults = &state.analytics;
    let scenario = Scenario::from_str(
        query
            .scenario
            .as_deref()
            .unwrap_or(&defaults.default_scenario),
    )?;
    let inflation_rate_pct = match query.inflation_rate.as_deref() {
        Some(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
            AppError::Validation(format!("inflation_rate is not a number: {raw}"))
        })?,
        None => defaults.default_inflation_rate_pct,
    };

    Ok(ProjectionParams {
        scenario,
        inflation_rate_pct,
        years: query.years.unwrap_or(defaults.default_projection_years),
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets/{budget_id}/projection` - Project a budget's totals forward.
async fn get_projection(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    Query(query): Query<ProjectionQuery>,
) -> ApiResult<Json<ProjectionResponse>> {
    let params = params(&state, &query)?;
    let basis = query.basis.unwrap_or_default();

    let snapshot = state.store.snapshot().await;
    let budget = snapshot
        .budgets
        .iter()
        .find(|b| b.id == budget_id)
        .ok_or_else(|| AppError::NotFound(format!("Budget not found: {budget_id}")))?;
    let actuals = state.actuals_provider(&snapshot);

    let report = CashFlowService::report_for_budget(
        budget,
        &snapshot.catalog,
        &snapshot.lines,
        actuals.as_ref(),
    )?;
    let base = basis.select(&report.summary);
    let projections = ProjectionEngine::project(&base, &params)?;

    info!(
        budget_id = %budget_id,
        scenario = %params.scenario,
        years = params.years,
        "Projection served"
    );

    Ok(Json(ProjectionResponse {
        budget_id,
        base_year: base.year(),
        base: base.into(),
        basis,
        scenario: params.scenario,
        inflation_rate_pct: percent(params.inflation_rate_pct),
        projections: projections.iter().map(Into::into).collect(),
    }))
}
