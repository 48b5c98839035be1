//! Actual entry type.

use parkfin_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetScope;

/// Realized cash flow for one category in one month, already aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualEntry {
    /// Category the amount was booked against.
    pub category_id: CategoryId,
    /// Month number, 1-12.
    pub month: u8,
    /// Calendar year.
    pub year: i32,
    /// Realized amount.
    pub amount: Decimal,
    /// Municipal or park scope of the booking.
    #[serde(default)]
    pub scope: BudgetScope,
}

impl ActualEntry {
    /// Creates a municipal entry.
    #[must_use]
    pub const fn new(category_id: CategoryId, year: i32, month: u8, amount: Decimal) -> Self {
        Self {
            category_id,
            month,
            year,
            amount,
            scope: BudgetScope::Municipal,
        }
    }

    /// Same entry booked against another scope.
    #[must_use]
    pub const fn with_scope(mut self, scope: BudgetScope) -> Self {
        self.scope = scope;
        self
    }
}
