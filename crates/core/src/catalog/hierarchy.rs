//! Parent/child relationships between categories, for display roll-ups only.
//!
//! The cash-flow engine works on flat categories. Dashboards that group
//! "Tree care" under "Maintenance" use this adjacency lookup on top of the
//! engine's per-category output.

use std::collections::{BTreeMap, HashMap, HashSet};

use parkfin_shared::types::CategoryId;
use rust_decimal::Decimal;

use super::error::CatalogError;

/// Child -> parent adjacency lookup.
#[derive(Debug, Clone, Default)]
pub struct CategoryHierarchy {
    parents: HashMap<CategoryId, CategoryId>,
}

impl CategoryHierarchy {
    /// Builds the hierarchy from `(child, parent)` links.
    ///
    /// Rejects a child listed under two different parents and any cycle.
    pub fn new(
        links: impl IntoIterator<Item = (CategoryId, CategoryId)>,
    ) -> Result<Self, CatalogError> {
        let mut parents = HashMap::new();
        for (child, parent) in links {
            match parents.insert(child, parent) {
                Some(previous) if previous != parent => {
                    return Err(CatalogError::MultipleParents(child));
                }
                _ => {}
            }
        }

        let hierarchy = Self { parents };
        for &start in hierarchy.parents.keys() {
            let mut seen = HashSet::from([start]);
            let mut current = start;
            while let Some(&parent) = hierarchy.parents.get(&current) {
                if !seen.insert(parent) {
                    return Err(CatalogError::Cycle(start));
                }
                current = parent;
            }
        }

        Ok(hierarchy)
    }

    /// Direct parent of a category.
    #[must_use]
    pub fn parent_of(&self, id: CategoryId) -> Option<CategoryId> {
        self.parents.get(&id).copied()
    }

    /// Direct children of a category, sorted by ID.
    #[must_use]
    pub fn children_of(&self, id: CategoryId) -> Vec<CategoryId> {
        let mut children: Vec<_> = self
            .parents
            .iter()
            .filter(|&(_, &parent)| parent == id)
            .map(|(&child, _)| child)
            .collect();
        children.sort_unstable();
        children
    }

    /// Ancestors from the direct parent up to the root.
    #[must_use]
    pub fn ancestors(&self, id: CategoryId) -> Vec<CategoryId> {
        let mut chain = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Topmost ancestor, or the category itself when it has no parent.
    #[must_use]
    pub fn root_of(&self, id: CategoryId) -> CategoryId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Categories that have children but no parent, sorted by ID.
    #[must_use]
    pub fn roots(&self) -> Vec<CategoryId> {
        let mut roots: Vec<_> = self
            .parents
            .values()
            .filter(|parent| !self.parents.contains_key(parent))
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Sums per-category amounts into their root categories.
    #[must_use]
    pub fn roll_up(
        &self,
        amounts: impl IntoIterator<Item = (CategoryId, Decimal)>,
    ) -> BTreeMap<CategoryId, Decimal> {
        let mut totals = BTreeMap::new();
        for (id, amount) in amounts {
            *totals.entry(self.root_of(id)).or_insert(Decimal::ZERO) += amount;
        }
        totals
    }
}
