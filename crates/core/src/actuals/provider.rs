//! The actuals collaborator seam.

use super::types::ActualEntry;
use crate::budget::BudgetScope;

/// Source of realized per-month amounts.
///
/// Implementations are deterministic: the same year and scope always yield the
/// same entries. Fetching from a bookkeeping system happens before the engine
/// runs; the engine only sees the resulting rows.
pub trait ActualsProvider {
    /// All entries for a year and scope.
    fn actuals(&self, year: i32, scope: BudgetScope) -> Vec<ActualEntry>;
}

/// Provider backed by already-recorded entries.
#[derive(Debug, Clone, Default)]
pub struct RecordedActuals {
    entries: Vec<ActualEntry>,
}

impl RecordedActuals {
    /// Wraps recorded entries.
    #[must_use]
    pub const fn new(entries: Vec<ActualEntry>) -> Self {
        Self { entries }
    }
}

impl ActualsProvider for RecordedActuals {
    fn actuals(&self, year: i32, scope: BudgetScope) -> Vec<ActualEntry> {
        self.entries
            .iter()
            .filter(|e| e.year == year && e.scope == scope)
            .cloned()
            .collect()
    }
}
