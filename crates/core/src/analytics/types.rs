//! Analytics data types.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ratio::Ratio;

/// A projected amount labelled with its category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAmount {
    /// Category name used for grouping.
    pub category: String,
    /// Projected amount.
    pub amount: Decimal,
}

impl NamedAmount {
    /// Creates a named amount.
    #[must_use]
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// One category's part of a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    /// Category name.
    pub category: String,
    /// Summed projected amount.
    pub amount: Decimal,
    /// Percentage of the total, 0 when the total is 0.
    pub share_pct: Decimal,
}

/// Recommendation severity, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Needs action.
    High,
    /// Worth watching.
    Medium,
    /// For information.
    Info,
}

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Margin below zero.
    Deficit,
    /// Margin between 0 and 5%.
    TightMargin,
    /// Margin of 10% or more.
    Healthy,
    /// Always present.
    Diversification,
}

/// Advisory note with a severity tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Rule that fired.
    pub kind: RecommendationKind,
    /// Severity.
    pub severity: Severity,
    /// Human-readable advice.
    pub message: String,
}

/// Ratios, category shares and recommendations for one budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetAnalysis {
    /// Total projected income.
    pub total_income: Decimal,
    /// Total projected expenses.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net: Decimal,
    /// Profit margin in percent.
    pub profit_margin_pct: Ratio,
    /// Income divided by expenses.
    pub income_to_expense_ratio: Ratio,
    /// Income by category, largest first.
    pub income_by_category: Vec<CategoryShare>,
    /// Expenses by category, largest first.
    pub expense_by_category: Vec<CategoryShare>,
    /// Applicable recommendations in rule order.
    pub recommendations: Vec<Recommendation>,
    /// Severity of the first recommendation.
    pub severity: Severity,
}
