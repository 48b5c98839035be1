//! Cash-flow matrix error types.

use parkfin_shared::types::CategoryId;
use thiserror::Error;

/// Errors raised while building the cash-flow matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashFlowError {
    /// A budget line or actual entry references a category missing from the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// An actual entry has a month outside 1-12.
    #[error("Invalid month {month} for category {category_id}")]
    InvalidMonth {
        /// Category of the entry.
        category_id: CategoryId,
        /// Offending month.
        month: u8,
    },
}
