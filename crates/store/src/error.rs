//! Store error types.

use std::path::PathBuf;

use parkfin_core::budget::BudgetError;
use parkfin_core::catalog::CatalogError;
use parkfin_shared::types::{BudgetId, BudgetLineId};
use thiserror::Error;

/// Errors raised by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No budget with this ID.
    #[error("Budget not found: {0}")]
    BudgetNotFound(BudgetId),

    /// A budget line points at a budget missing from the dataset.
    #[error("Budget line {line_id} references unknown budget {budget_id}")]
    OrphanLine {
        /// Line ID.
        line_id: BudgetLineId,
        /// Missing budget.
        budget_id: BudgetId,
    },

    /// Two budgets share an ID.
    #[error("Duplicate budget ID in dataset: {0}")]
    DuplicateBudget(BudgetId),

    /// Dataset file could not be read or written.
    #[error("Dataset I/O failed for {path}: {source}")]
    Io {
        /// Dataset path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON or fails line validation.
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Category catalog or hierarchy rejected.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Budget rule violated.
    #[error(transparent)]
    Budget(#[from] BudgetError),
}
