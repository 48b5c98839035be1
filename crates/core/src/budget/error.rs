//! Budget error types.

use parkfin_shared::types::{BudgetId, BudgetLineId, CategoryId};
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::BudgetStatus;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Budget line failed validation when it was constructed.
    #[error("Invalid budget line {line_id}: {defect}")]
    InvalidBudgetLine {
        /// Offending line.
        line_id: BudgetLineId,
        /// What is wrong with it.
        defect: LineDefect,
    },

    /// Budget is no longer a draft and cannot be modified.
    #[error("Budget {budget_id} is {status:?} and cannot be modified")]
    BudgetLocked {
        /// Budget ID.
        budget_id: BudgetId,
        /// Current status.
        status: BudgetStatus,
    },

    /// Status change not allowed by the lifecycle.
    #[error("Cannot move budget from {from:?} to {to:?}")]
    InvalidStatusTransition {
        /// Current status.
        from: BudgetStatus,
        /// Requested status.
        to: BudgetStatus,
    },

    /// Line belongs to a different budget.
    #[error("Budget line {line_id} does not belong to budget {budget_id}")]
    LineBudgetMismatch {
        /// Line ID.
        line_id: BudgetLineId,
        /// Budget the line was offered to.
        budget_id: BudgetId,
    },

    /// Line references a category missing from the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// Line not found in the budget.
    #[error("Budget line not found: {0}")]
    LineNotFound(BudgetLineId),

    /// Line ID already used in the budget.
    #[error("Budget line already exists: {0}")]
    DuplicateLine(BudgetLineId),
}

/// Reasons a budget line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineDefect {
    /// Projected amount below zero.
    #[error("projected amount {0} is negative")]
    NegativeAmount(Decimal),

    /// Explicit distribution does not have twelve entries.
    #[error("monthly distribution has {0} entries, expected 12")]
    WrongMonthCount(usize),

    /// Explicit distribution contains a negative month.
    #[error("month {month} has negative amount {amount}")]
    NegativeMonth {
        /// Month number (1-12).
        month: u8,
        /// Offending amount.
        amount: Decimal,
    },

    /// Explicit distribution does not add up to the projected amount.
    #[error("monthly distribution sums to {actual}, expected {expected}")]
    DistributionMismatch {
        /// Projected amount.
        expected: Decimal,
        /// Sum of the distribution.
        actual: Decimal,
    },

    /// Seasonal weights are negative or all zero.
    #[error("seasonal weights must be non-negative with a positive sum")]
    InvalidWeights,
}
