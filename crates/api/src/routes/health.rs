//! Liveness endpoint with dataset counts.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Budgets currently loaded.
    pub budgets: usize,
    /// Categories currently loaded.
    pub categories: usize,
    /// Whether cash-flow actuals come from the synthetic feed.
    pub synthetic_actuals: bool,
}

/// GET `/health`
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.store.snapshot().await;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        budgets: snapshot.budgets.len(),
        categories: snapshot.catalog.len(),
        synthetic_actuals: state.data.synthetic_actuals,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
