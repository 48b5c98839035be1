//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod analytics;
pub mod budgets;
pub mod cash_flow;
pub mod health;
pub mod projection;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(cash_flow::routes())
        .merge(budgets::routes())
        .merge(projection::routes())
        .merge(analytics::routes())
}
