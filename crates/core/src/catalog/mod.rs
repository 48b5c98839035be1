//! Income and expense categories.

pub mod error;
pub mod hierarchy;
pub mod types;

pub use error::CatalogError;
pub use hierarchy::CategoryHierarchy;
pub use types::{Category, CategoryCatalog, CategoryType};
