//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Read-only query routes for cash flow, projections and analytics
//! - Budget lifecycle commands (status changes, duplication)
//! - Error-to-response mapping and response formatting

pub mod error;
pub mod format;
pub mod routes;

use axum::Router;
use parkfin_core::actuals::{ActualsProvider, RecordedActuals, SyntheticActuals};
use parkfin_shared::{AnalyticsConfig, DataConfig};
use parkfin_store::{Snapshot, Store};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory store.
    pub store: Store,
    /// Dataset and actuals feed settings.
    pub data: DataConfig,
    /// Defaults for projection queries.
    pub analytics: AnalyticsConfig,
}

impl AppState {
    /// Actuals feed for a snapshot: recorded entries, or the synthetic feed
    /// when enabled in config.
    #[must_use]
    pub fn actuals_provider(&self, snapshot: &Snapshot) -> Box<dyn ActualsProvider + Send + Sync> {
        if self.data.synthetic_actuals {
            Box::new(SyntheticActuals::new(
                self.data.synthetic_seed,
                self.data.synthetic_variance_pct,
                snapshot.budgets.clone(),
                snapshot.lines.clone(),
            ))
        } else {
            Box::new(RecordedActuals::new(snapshot.actuals.clone()))
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
