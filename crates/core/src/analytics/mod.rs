//! Ratios, category shares and recommendations for a single budget.

pub mod ratio;
pub mod service;
pub mod types;


pub use ratio::{Ratio, UndefinedReason, income_to_expense_ratio, profit_margin_pct, share_pct};
pub use service::{BudgetAnalytics, HEALTHY_MARGIN_PCT, TIGHT_MARGIN_PCT};
pub use types::{
    BudgetAnalysis, CategoryShare, NamedAmount, Recommendation, RecommendationKind, Severity,
};
