//! Budget repository.

use parkfin_core::budget::{Budget, BudgetLine, BudgetScope, BudgetService, BudgetStatus};
use parkfin_shared::types::BudgetId;
use tracing::info;

use crate::Store;
use crate::error::StoreError;

/// Optional filters for listing budgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetFilter {
    /// Only budgets of this year.
    pub year: Option<i32>,
    /// Only budgets of this scope.
    pub scope: Option<BudgetScope>,
}

/// Budget queries and lifecycle commands.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    store: Store,
}

impl BudgetRepository {
    /// Creates a repository over a store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Lists budgets, newest year first, then by name.
    pub async fn list_budgets(&self, filter: BudgetFilter) -> Vec<Budget> {
        let state = self.store.state().read().await;
        let mut budgets: Vec<Budget> = state
            .budgets
            .iter()
            .filter(|b| filter.year.is_none_or(|year| b.year == year))
            .filter(|b| filter.scope.is_none_or(|scope| b.scope == scope))
            .cloned()
            .collect();
        budgets.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.name.cmp(&b.name)));
        budgets
    }

    /// Gets a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BudgetNotFound` for an unknown ID.
    pub async fn get_budget(&self, budget_id: BudgetId) -> Result<Budget, StoreError> {
        self.store
            .state()
            .read()
            .await
            .budgets
            .iter()
            .find(|b| b.id == budget_id)
            .cloned()
            .ok_or(StoreError::BudgetNotFound(budget_id))
    }

    /// Gets a budget together with its lines.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BudgetNotFound` for an unknown ID.
    pub async fn get_budget_with_lines(
        &self,
        budget_id: BudgetId,
    ) -> Result<(Budget, Vec<BudgetLine>), StoreError> {
        let state = self.store.state().read().await;
        let budget = state
            .budgets
            .iter()
            .find(|b| b.id == budget_id)
            .cloned()
            .ok_or(StoreError::BudgetNotFound(budget_id))?;
        let lines = BudgetService::lines_of(budget_id, &state.lines)
            .cloned()
            .collect();
        Ok((budget, lines))
    }

    /// Moves a budget to another lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BudgetNotFound` for an unknown ID and
    /// `StoreError::Budget` when the transition is not allowed.
    pub async fn set_status(
        &self,
        budget_id: BudgetId,
        status: BudgetStatus,
    ) -> Result<Budget, StoreError> {
        let mut state = self.store.state().write().await;
        let budget = state
            .budgets
            .iter_mut()
            .find(|b| b.id == budget_id)
            .ok_or(StoreError::BudgetNotFound(budget_id))?;
        let from = budget.status;
        BudgetService::transition(budget, status)?;
        info!(budget_id = %budget_id, from = ?from, to = ?status, "Budget status changed");
        Ok(budget.clone())
    }

    /// Copies a budget and its lines into a new draft.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BudgetNotFound` for an unknown ID.
    pub async fn duplicate_budget(
        &self,
        budget_id: BudgetId,
        name: Option<String>,
        year: Option<i32>,
    ) -> Result<(Budget, Vec<BudgetLine>), StoreError> {
        let mut state = self.store.state().write().await;
        let source = state
            .budgets
            .iter()
            .find(|b| b.id == budget_id)
            .ok_or(StoreError::BudgetNotFound(budget_id))?;
        let (copy, lines) =
            BudgetService::duplicate(source, &state.lines, name, year, &state.catalog)?;

        state.budgets.push(copy.clone());
        state.lines.extend(lines.iter().cloned());
        info!(
            source = %budget_id,
            copy = %copy.id,
            lines = lines.len(),
            "Budget duplicated"
        );
        Ok((copy, lines))
    }
}
