//! Catalog error types.

use parkfin_shared::types::CategoryId;
use thiserror::Error;

/// Category catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two categories share the same ID.
    #[error("Duplicate category: {0}")]
    DuplicateCategory(CategoryId),

    /// A category was given two different parents.
    #[error("Category {0} has more than one parent")]
    MultipleParents(CategoryId),

    /// Following parent links from this category leads back to it.
    #[error("Category hierarchy contains a cycle through {0}")]
    Cycle(CategoryId),
}
