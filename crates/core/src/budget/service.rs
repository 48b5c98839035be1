//! Budget lifecycle rules: status changes, line edits, duplication and
//! selection of the budget in force for a year and scope.

use parkfin_shared::types::{BudgetId, BudgetLineId};
use tracing::debug;

use super::error::BudgetError;
use super::types::{Budget, BudgetLine, BudgetScope, BudgetStatus};
use crate::catalog::CategoryCatalog;

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Moves a budget to `next` if the lifecycle allows it.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidStatusTransition` for any other move.
    pub fn transition(budget: &mut Budget, next: BudgetStatus) -> Result<(), BudgetError> {
        if !budget.status.can_transition_to(next) {
            return Err(BudgetError::InvalidStatusTransition {
                from: budget.status,
                to: next,
            });
        }
        debug!(budget_id = %budget.id, from = ?budget.status, to = ?next, "Budget status changed");
        budget.status = next;
        Ok(())
    }

    /// Validates that `line` may be written into `budget`.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::BudgetLocked` if the budget is not a draft,
    /// `BudgetError::LineBudgetMismatch` if the line targets another budget and
    /// `BudgetError::UnknownCategory` if the category is not in the catalog.
    pub fn validate_budget_line(
        budget: &Budget,
        line: &BudgetLine,
        catalog: &CategoryCatalog,
    ) -> Result<(), BudgetError> {
        Self::ensure_editable(budget)?;

        if line.budget_id() != budget.id {
            return Err(BudgetError::LineBudgetMismatch {
                line_id: line.id(),
                budget_id: budget.id,
            });
        }

        if !catalog.contains(line.category_id()) {
            return Err(BudgetError::UnknownCategory(line.category_id()));
        }

        Ok(())
    }

    /// Adds a line to a draft budget and refreshes its totals.
    pub fn add_line(
        budget: &mut Budget,
        lines: &mut Vec<BudgetLine>,
        line: BudgetLine,
        catalog: &CategoryCatalog,
    ) -> Result<(), BudgetError> {
        Self::validate_budget_line(budget, &line, catalog)?;
        if lines.iter().any(|l| l.id() == line.id()) {
            return Err(BudgetError::DuplicateLine(line.id()));
        }
        lines.push(line);
        budget.recompute_totals(lines, catalog)
    }

    /// Replaces this budget's line with the same ID and refreshes totals.
    pub fn replace_line(
        budget: &mut Budget,
        lines: &mut [BudgetLine],
        line: BudgetLine,
        catalog: &CategoryCatalog,
    ) -> Result<(), BudgetError> {
        Self::validate_budget_line(budget, &line, catalog)?;
        let slot = lines
            .iter_mut()
            .find(|l| l.id() == line.id() && l.budget_id() == budget.id)
            .ok_or(BudgetError::LineNotFound(line.id()))?;
        *slot = line;
        budget.recompute_totals(lines, catalog)
    }

    /// Removes a line from a draft budget and refreshes totals.
    pub fn remove_line(
        budget: &mut Budget,
        lines: &mut Vec<BudgetLine>,
        line_id: BudgetLineId,
        catalog: &CategoryCatalog,
    ) -> Result<BudgetLine, BudgetError> {
        Self::ensure_editable(budget)?;
        let index = lines
            .iter()
            .position(|l| l.id() == line_id && l.budget_id() == budget.id)
            .ok_or(BudgetError::LineNotFound(line_id))?;
        let removed = lines.remove(index);
        budget.recompute_totals(lines, catalog)?;
        Ok(removed)
    }

    /// Creates a new draft copy of `budget` with its lines copied verbatim.
    ///
    /// Name and year default to the source's. Lines get fresh IDs; concepts,
    /// amounts and monthly vectors are unchanged.
    pub fn duplicate(
        budget: &Budget,
        lines: &[BudgetLine],
        name: Option<String>,
        year: Option<i32>,
        catalog: &CategoryCatalog,
    ) -> Result<(Budget, Vec<BudgetLine>), BudgetError> {
        let mut copy = Budget::new(
            name.unwrap_or_else(|| budget.name.clone()),
            year.unwrap_or(budget.year),
            budget.scope,
        );

        let copied: Vec<BudgetLine> = Self::lines_of(budget.id, lines)
            .map(|line| line.copy_into(copy.id))
            .collect();

        copy.recompute_totals(&copied, catalog)?;
        debug!(source = %budget.id, copy = %copy.id, lines = copied.len(), "Budget duplicated");
        Ok((copy, copied))
    }

    /// Lines belonging to one budget.
    pub fn lines_of(budget_id: BudgetId, lines: &[BudgetLine]) -> impl Iterator<Item = &BudgetLine> {
        lines.iter().filter(move |l| l.budget_id() == budget_id)
    }

    /// Picks the budget in force for a year and scope.
    ///
    /// Archived budgets never qualify. Active beats Approved beats Draft; a tie
    /// goes to the lowest ID.
    pub fn select_effective<'a>(
        budgets: impl IntoIterator<Item = &'a Budget>,
        year: i32,
        scope: BudgetScope,
    ) -> Option<&'a Budget> {
        budgets
            .into_iter()
            .filter(|b| b.year == year && b.scope == scope && b.status != BudgetStatus::Archived)
            .max_by(|a, b| {
                a.status
                    .precedence()
                    .cmp(&b.status.precedence())
                    .then_with(|| b.id.cmp(&a.id))
            })
    }

    fn ensure_editable(budget: &Budget) -> Result<(), BudgetError> {
        if budget.status.is_editable() {
            Ok(())
        } else {
            Err(BudgetError::BudgetLocked {
                budget_id: budget.id,
                status: budget.status,
            })
        }
    }
}
