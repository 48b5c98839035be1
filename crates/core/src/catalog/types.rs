//! Category types and the flat catalog the engine reads.

use std::collections::HashMap;

use parkfin_shared::types::CategoryId;
use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Whether a category collects money in or pays money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    /// Donations, fees, grants.
    Income,
    /// Maintenance, staff, utilities.
    Expense,
}

/// An income or expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// Inactive categories are hidden unless something references them.
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Category {
    /// Creates an active category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, category_type: CategoryType) -> Self {
        Self {
            id,
            name: name.into(),
            category_type,
            active: true,
        }
    }

    /// Returns true for income categories.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.category_type == CategoryType::Income
    }
}

/// Flat lookup of categories by ID, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    index: HashMap<CategoryId, usize>,
}

impl CategoryCatalog {
    /// Builds a catalog, rejecting duplicate IDs.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for category in categories {
            if catalog.index.contains_key(&category.id) {
                return Err(CatalogError::DuplicateCategory(category.id));
            }
            catalog.index.insert(category.id, catalog.categories.len());
            catalog.categories.push(category);
        }
        Ok(catalog)
    }

    /// Looks up a category.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.index.get(&id).map(|&i| &self.categories[i])
    }

    /// Returns true if the catalog knows this category.
    #[must_use]
    pub fn contains(&self, id: CategoryId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Iterates categories of one type.
    pub fn of_type(&self, category_type: CategoryType) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(move |c| c.category_type == category_type)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
