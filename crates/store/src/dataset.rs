//! On-disk JSON dataset.

use std::path::Path;

use chrono::{DateTime, Utc};
use parkfin_core::actuals::ActualEntry;
use parkfin_core::budget::{Budget, BudgetLine};
use parkfin_core::catalog::Category;
use parkfin_shared::types::CategoryId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;

/// Child -> parent link in the category hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    /// Child category.
    pub child: CategoryId,
    /// Parent category.
    pub parent: CategoryId,
}

/// Everything the store holds, as serialized to disk.
///
/// Budget lines are validated while deserializing, so a dataset with a
/// negative amount or a malformed monthly distribution fails to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// When the dataset was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Category catalog.
    pub categories: Vec<Category>,
    /// Display hierarchy.
    #[serde(default)]
    pub category_links: Vec<CategoryLink>,
    /// Budgets.
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Lines of every budget.
    #[serde(default)]
    pub budget_lines: Vec<BudgetLine>,
    /// Recorded actuals.
    #[serde(default)]
    pub actuals: Vec<ActualEntry>,
}

impl Dataset {
    /// Parses a dataset from JSON.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` for malformed JSON or invalid lines.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` when the file cannot be read and
    /// `StoreError::Parse` when its content is invalid.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let dataset = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            categories = dataset.categories.len(),
            budgets = dataset.budgets.len(),
            lines = dataset.budget_lines.len(),
            actuals = dataset.actuals.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Writes the dataset as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` when the file cannot be written.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let io_error = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await.map_err(io_error)?;

        info!(path = %path.display(), budgets = self.budgets.len(), "Dataset saved");
        Ok(())
    }
}
