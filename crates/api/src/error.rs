//! Maps domain errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parkfin_core::budget::BudgetError;
use parkfin_core::cashflow::CashFlowError;
use parkfin_core::projection::ProjectionError;
use parkfin_shared::AppError;
use parkfin_store::StoreError;
use serde_json::json;
use tracing::{error, warn};

/// Handler error rendered as `{ "error": code, "message": text }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Handler result.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }

        let message = match &self.0 {
            AppError::NotFound(m)
            | AppError::Validation(m)
            | AppError::BusinessRule(m)
            | AppError::DataSource(m)
            | AppError::Internal(m) => m.clone(),
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<BudgetError> for ApiError {
    fn from(e: BudgetError) -> Self {
        Self(match e {
            BudgetError::InvalidBudgetLine { .. }
            | BudgetError::UnknownCategory(_)
            | BudgetError::LineBudgetMismatch { .. }
            | BudgetError::DuplicateLine(_) => AppError::Validation(e.to_string()),
            BudgetError::LineNotFound(_) => AppError::NotFound(e.to_string()),
            BudgetError::BudgetLocked { .. } | BudgetError::InvalidStatusTransition { .. } => {
                AppError::BusinessRule(e.to_string())
            }
        })
    }
}

impl From<CashFlowError> for ApiError {
    fn from(e: CashFlowError) -> Self {
        Self(match e {
            CashFlowError::UnknownCategory(_) | CashFlowError::InvalidMonth { .. } => {
                AppError::Validation(e.to_string())
            }
        })
    }
}

impl From<ProjectionError> for ApiError {
    fn from(e: ProjectionError) -> Self {
        Self(match e {
            ProjectionError::Overflow(_) => AppError::BusinessRule(e.to_string()),
            ProjectionError::InvalidBaseSummary { .. }
            | ProjectionError::InvalidHorizon { .. }
            | ProjectionError::InvalidInflationRate(_)
            | ProjectionError::UnknownScenario(_) => AppError::Validation(e.to_string()),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::BudgetNotFound(_) => Self(AppError::NotFound(e.to_string())),
            StoreError::Budget(inner) => inner.into(),
            StoreError::OrphanLine { .. }
            | StoreError::DuplicateBudget(_)
            | StoreError::Io { .. }
            | StoreError::Parse(_)
            | StoreError::Catalog(_) => Self(AppError::DataSource(e.to_string())),
        }
    }
}
