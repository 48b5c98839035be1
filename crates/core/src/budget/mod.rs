//! Budgets, budget lines and their monthly distribution.

pub mod distribution;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use distribution::{DistributionPolicy, INTERNAL_DECIMAL_PLACES};
pub use error::{BudgetError, LineDefect};
pub use service::BudgetService;
pub use types::{Budget, BudgetLine, BudgetLineInput, BudgetScope, BudgetStatus};
