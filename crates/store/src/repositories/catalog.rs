//! Category repository.

use parkfin_core::catalog::{CategoryCatalog, CategoryHierarchy};

use crate::Store;

/// Read access to the category catalog and hierarchy.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    store: Store,
}

impl CatalogRepository {
    /// Creates a repository over a store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Copy of the catalog.
    pub async fn catalog(&self) -> CategoryCatalog {
        self.store.state().read().await.catalog.clone()
    }

    /// Copy of the hierarchy.
    pub async fn hierarchy(&self) -> CategoryHierarchy {
        self.store.state().read().await.hierarchy.clone()
    }
}
