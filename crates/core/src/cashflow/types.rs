//! Cash-flow matrix types.

use parkfin_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::variance::VarianceDirection;
use crate::MonthlyVector;
use crate::budget::BudgetScope;
use crate::catalog::CategoryType;

/// One category in one month. Computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowCell {
    /// Category ID.
    pub category_id: CategoryId,
    /// Month number, 1-12.
    pub month: u8,
    /// Planned amount.
    pub projected: Decimal,
    /// Realized amount.
    pub real: Decimal,
    /// `(real - projected) / projected * 100`, with the zero branches applied.
    pub variance_pct: Decimal,
}

/// One category across the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFlow {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub name: String,
    /// Income or expense.
    pub category_type: CategoryType,
    /// Planned amount per month.
    pub projected: MonthlyVector,
    /// Realized amount per month.
    pub real: MonthlyVector,
    /// Variance per month.
    pub variance_pct: MonthlyVector,
    /// Sum of `projected`.
    pub annual_projected: Decimal,
    /// Sum of `real`.
    pub annual_real: Decimal,
    /// Variance of the annual sums.
    pub annual_variance_pct: Decimal,
    /// Whether the annual deviation helps or hurts.
    pub direction: VarianceDirection,
}

impl CategoryFlow {
    /// Flattens the row into twelve cells.
    pub fn cells(&self) -> impl Iterator<Item = CashFlowCell> + '_ {
        (0..self.projected.len()).map(move |i| CashFlowCell {
            category_id: self.category_id,
            month: u8::try_from(i + 1).unwrap_or(u8::MAX),
            projected: self.projected[i],
            real: self.real[i],
            variance_pct: self.variance_pct[i],
        })
    }
}

/// Per-category, per-month projected vs real matrix for one year and scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowMatrix {
    /// Year covered.
    pub year: i32,
    /// Scope covered.
    pub scope: BudgetScope,
    /// One row per category, in catalog order.
    pub rows: Vec<CategoryFlow>,
}

impl CashFlowMatrix {
    /// All cells as a flat list, row by row.
    #[must_use]
    pub fn cells(&self) -> Vec<CashFlowCell> {
        self.rows.iter().flat_map(CategoryFlow::cells).collect()
    }

    /// Row for one category.
    #[must_use]
    pub fn row(&self, category_id: CategoryId) -> Option<&CategoryFlow> {
        self.rows.iter().find(|r| r.category_id == category_id)
    }

    /// Rows of one category type.
    pub fn rows_of_type(&self, category_type: CategoryType) -> impl Iterator<Item = &CategoryFlow> {
        self.rows
            .iter()
            .filter(move |r| r.category_type == category_type)
    }
}
