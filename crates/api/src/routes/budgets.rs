//! Budget query and lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use parkfin_core::budget::{Budget, BudgetLine, BudgetScope, BudgetStatus};
use parkfin_core::catalog::{CategoryCatalog, CategoryType};
use parkfin_shared::types::{BudgetId, BudgetLineId, CategoryId, ParkId};
use parkfin_store::{BudgetFilter, BudgetRepository, CatalogRepository};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;
use crate::error::ApiResult;
use crate::format::{money, money_months};

/// Creates budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route("/budgets/{budget_id}", get(get_budget))
        .route("/budgets/{budget_id}/duplicate", post(duplicate_budget))
        .route("/budgets/{budget_id}/status", post(change_status))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing budgets.
#[derive(Debug, Default, Deserialize)]
pub struct ListBudgetsQuery {
    /// Only budgets of this year.
    pub year: Option<i32>,
    /// Only budgets of this park.
    pub park_id: Option<ParkId>,
}

/// Request body for duplicating a budget.
#[derive(Debug, Default, Deserialize)]
pub struct DuplicateBudgetRequest {
    /// Name of the copy; defaults to the source name.
    pub name: Option<String>,
    /// Year of the copy; defaults to the source year.
    pub year: Option<i32>,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    /// Target status.
    pub status: BudgetStatus,
}

/// Budget header.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Budget year.
    pub year: i32,
    /// Municipal or park scope.
    pub scope: BudgetScope,
    /// Lifecycle status.
    pub status: BudgetStatus,
    /// Sum of income lines.
    pub total_income: String,
    /// Sum of expense lines.
    pub total_expenses: String,
    /// Income minus expenses.
    pub net: String,
}

impl From<&Budget> for BudgetResponse {
    fn from(budget: &Budget) -> Self {
        Self {
            id: budget.id,
            name: budget.name.clone(),
            year: budget.year,
            scope: budget.scope,
            status: budget.status,
            total_income: money(budget.total_income()),
            total_expenses: money(budget.total_expenses()),
            net: money(budget.total_income() - budget.total_expenses()),
        }
    }
}

/// Budget line with its monthly vector.
#[derive(Debug, Serialize)]
pub struct BudgetLineResponse {
    /// Line ID.
    pub id: BudgetLineId,
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// Income or expense.
    pub category_type: Option<CategoryType>,
    /// Free-text concept.
    pub concept: String,
    /// Planned amount for the year.
    pub projected_amount: String,
    /// Whether the months were supplied explicitly.
    pub explicit_distribution: bool,
    /// Planned amount per month.
    pub monthly: Vec<String>,
}

impl BudgetLineResponse {
    fn new(line: &BudgetLine, catalog: &CategoryCatalog) -> Self {
        let category = catalog.get(line.category_id());
        Self {
            id: line.id(),
            category_id: line.category_id(),
            category_name: category.map(|c| c.name.clone()).unwrap_or_default(),
            category_type: category.map(|c| c.category_type),
            concept: line.concept().to_string(),
            projected_amount: money(line.projected_amount()),
            explicit_distribution: line.has_explicit_distribution(),
            monthly: money_months(line.monthly()),
        }
    }
}

/// Budget header with its lines.
#[derive(Debug, Serialize)]
pub struct BudgetDetailResponse {
    /// Header.
    #[serde(flatten)]
    pub budget: BudgetResponse,
    /// Lines in insertion order.
    pub lines: Vec<BudgetLineResponse>,
}

/// List response.
#[derive(Debug, Serialize)]
pub struct ListBudgetsResponse {
    /// Matching budgets.
    pub data: Vec<BudgetResponse>,
    /// Number of matches.
    pub total: usize,
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn detail(state: &AppState, budget: &Budget, lines: &[BudgetLine]) -> BudgetDetailResponse {
    let catalog = CatalogRepository::new(state.store.clone()).catalog().await;
    BudgetDetailResponse {
        budget: budget.into(),
        lines: lines
            .iter()
            .map(|line| BudgetLineResponse::new(line, &catalog))
            .collect(),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets` - List budgets, optionally by year and park.
async fn list_budgets(
    State(state): State<AppState>,
    Query(query): Query<ListBudgetsQuery>,
) -> Json<ListBudgetsResponse> {
    let filter = BudgetFilter {
        year: query.year,
        scope: query.park_id.map(BudgetScope::Park),
    };
    let budgets = BudgetRepository::new(state.store.clone())
        .list_budgets(filter)
        .await;

    let data: Vec<BudgetResponse> = budgets.iter().map(Into::into).collect();
    let total = data.len();
    Json(ListBudgetsResponse { data, total })
}

/// GET `/budgets/{budget_id}` - Budget with its lines.
async fn get_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<BudgetDetailResponse>> {
    let (budget, lines) = BudgetRepository::new(state.store.clone())
        .get_budget_with_lines(budget_id)
        .await?;

    Ok(Json(detail(&state, &budget, &lines).await))
}

/// POST `/budgets/{budget_id}/duplicate` - Copy a budget into a new draft.
async fn duplicate_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    Json(request): Json<DuplicateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<BudgetDetailResponse>)> {
    let (copy, lines) = BudgetRepository::new(state.store.clone())
        .duplicate_budget(budget_id, request.name, request.year)
        .await?;

    info!(source = %budget_id, copy = %copy.id, "Duplicate budget request served");
    Ok((StatusCode::CREATED, Json(detail(&state, &copy, &lines).await)))
}

/// POST `/budgets/{budget_id}/status` - Move a budget through its lifecycle.
async fn change_status(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    Json(request): Json<ChangeStatusRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    let budget = BudgetRepository::new(state.store.clone())
        .set_status(budget_id, request.status)
        .await?;

    Ok(Json((&budget).into()))
}
