//! In-memory store for ParkFin.
//!
//! This crate provides:
//! - The JSON dataset format and its loader
//! - A shared, lock-protected in-memory state
//! - Repository handles for categories, budgets and actuals
//!
//! Reads hand out owned copies so engine computations run outside the lock.

pub mod dataset;
pub mod error;
pub mod repositories;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use parkfin_core::actuals::ActualEntry;
use parkfin_core::budget::{Budget, BudgetLine};
use parkfin_core::catalog::{CategoryCatalog, CategoryHierarchy};
use tokio::sync::RwLock;
use tracing::debug;

pub use dataset::{CategoryLink, Dataset};
pub use error::StoreError;
pub use repositories::{ActualsRepository, BudgetFilter, BudgetRepository, CatalogRepository};

/// Validated contents of a dataset.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) catalog: CategoryCatalog,
    pub(crate) hierarchy: CategoryHierarchy,
    pub(crate) links: Vec<CategoryLink>,
    pub(crate) budgets: Vec<Budget>,
    pub(crate) lines: Vec<BudgetLine>,
    pub(crate) actuals: Vec<ActualEntry>,
}

impl State {
    fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        let catalog = CategoryCatalog::new(dataset.categories)?;
        let hierarchy =
            CategoryHierarchy::new(dataset.category_links.iter().map(|l| (l.child, l.parent)))?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = dataset.budgets.iter().find(|b| !seen.insert(b.id)) {
            return Err(StoreError::DuplicateBudget(duplicate.id));
        }
        if let Some(orphan) = dataset
            .budget_lines
            .iter()
            .find(|l| !seen.contains(&l.budget_id()))
        {
            return Err(StoreError::OrphanLine {
                line_id: orphan.id(),
                budget_id: orphan.budget_id(),
            });
        }

        let mut budgets = dataset.budgets;
        for budget in &mut budgets {
            budget.recompute_totals(&dataset.budget_lines, &catalog)?;
        }

        Ok(Self {
            catalog,
            hierarchy,
            links: dataset.category_links,
            budgets,
            lines: dataset.budget_lines,
            actuals: dataset.actuals,
        })
    }

    fn to_dataset(&self) -> Dataset {
        Dataset {
            generated_at: None,
            categories: self.catalog.iter().cloned().collect(),
            category_links: self.links.clone(),
            budgets: self.budgets.clone(),
            budget_lines: self.lines.clone(),
            actuals: self.actuals.clone(),
        }
    }
}

/// Owned copy of everything a cash-flow computation needs.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Category catalog.
    pub catalog: CategoryCatalog,
    /// Display hierarchy.
    pub hierarchy: CategoryHierarchy,
    /// All budgets.
    pub budgets: Vec<Budget>,
    /// All budget lines.
    pub lines: Vec<BudgetLine>,
    /// All recorded actuals.
    pub actuals: Vec<ActualEntry>,
}

/// Shared handle to the in-memory state. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<RwLock<State>>,
}

impl Store {
    /// Builds a store from a dataset.
    ///
    /// Budget totals are recomputed from the lines; stored totals are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog or hierarchy is invalid, budget IDs
    /// repeat, a line references a missing budget, or a line references an
    /// unknown category.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        let state = State::from_dataset(dataset)?;
        debug!(
            categories = state.catalog.len(),
            budgets = state.budgets.len(),
            lines = state.lines.len(),
            "Store initialised"
        );
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Current contents as a dataset.
    pub async fn dataset(&self) -> Dataset {
        self.state.read().await.to_dataset()
    }

    /// Writes the current contents to a file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` when the file cannot be written.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.dataset().await.save(path).await
    }

    /// Owned copy of the whole state.
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.read().await;
        Snapshot {
            catalog: state.catalog.clone(),
            hierarchy: state.hierarchy.clone(),
            budgets: state.budgets.clone(),
            lines: state.lines.clone(),
            actuals: state.actuals.clone(),
        }
    }

    pub(crate) const fn state(&self) -> &Arc<RwLock<State>> {
        &self.state
    }
}

/// Loads a dataset file into a new store.
///
/// # Errors
///
/// Returns an error when the file cannot be read or its content is invalid.
pub async fn open(path: impl AsRef<Path>) -> Result<Store, StoreError> {
    Store::from_dataset(Dataset::load(path).await?)
}
