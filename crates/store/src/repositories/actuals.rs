//! Actuals repository.

use parkfin_core::actuals::ActualEntry;
use parkfin_core::budget::BudgetScope;

use crate::Store;

/// Read access to recorded actuals.
#[derive(Debug, Clone)]
pub struct ActualsRepository {
    store: Store,
}

impl ActualsRepository {
    /// Creates a repository over a store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Entries for one year and scope.
    pub async fn list_actuals(&self, year: i32, scope: BudgetScope) -> Vec<ActualEntry> {
        self.store
            .state()
            .read()
            .await
            .actuals
            .iter()
            .filter(|e| e.year == year && e.scope == scope)
            .cloned()
            .collect()
    }
}
