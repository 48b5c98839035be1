//! Repository handles over the shared store.

pub mod actuals;
pub mod budget;
pub mod catalog;

pub use actuals::ActualsRepository;
pub use budget::{BudgetFilter, BudgetRepository};
pub use catalog::CatalogRepository;
