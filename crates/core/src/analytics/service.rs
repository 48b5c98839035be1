//! Budget analytics service.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::ratio::{Ratio, UndefinedReason, income_to_expense_ratio, profit_margin_pct, share_pct};
use super::types::{
    BudgetAnalysis, CategoryShare, NamedAmount, Recommendation, RecommendationKind, Severity,
};
use crate::budget::{Budget, BudgetError, BudgetLine, BudgetService};
use crate::catalog::{CategoryCatalog, CategoryType};

/// Margin below which a positive margin is called tight, in percent.
pub const TIGHT_MARGIN_PCT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Margin from which a budget is called healthy, in percent.
pub const HEALTHY_MARGIN_PCT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Analytics over a single budget's totals and lines.
pub struct BudgetAnalytics;

impl BudgetAnalytics {
    /// Derives ratios, category shares and recommendations.
    ///
    /// Shares are expressed against `total_income` and `total_expenses`.
    #[must_use]
    pub fn analyze(
        total_income: Decimal,
        total_expenses: Decimal,
        income_lines: &[NamedAmount],
        expense_lines: &[NamedAmount],
    ) -> BudgetAnalysis {
        let profit_margin = profit_margin_pct(total_income, total_expenses);
        let recommendations = Self::recommend(profit_margin, total_income, total_expenses);
        let severity = recommendations
            .first()
            .map_or(Severity::Info, |r| r.severity);

        BudgetAnalysis {
            total_income,
            total_expenses,
            net: total_income - total_expenses,
            profit_margin_pct: profit_margin,
            income_to_expense_ratio: income_to_expense_ratio(total_income, total_expenses),
            income_by_category: Self::shares(income_lines, total_income),
            expense_by_category: Self::shares(expense_lines, total_expenses),
            recommendations,
            severity,
        }
    }

    /// Analyzes a budget from its cached totals and its lines.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UnknownCategory` when a line's category is not
    /// in the catalog.
    pub fn analyze_budget(
        budget: &Budget,
        lines: &[BudgetLine],
        catalog: &CategoryCatalog,
    ) -> Result<BudgetAnalysis, BudgetError> {
        let mut income = Vec::new();
        let mut expenses = Vec::new();
        for line in BudgetService::lines_of(budget.id, lines) {
            let category = catalog
                .get(line.category_id())
                .ok_or(BudgetError::UnknownCategory(line.category_id()))?;
            let named = NamedAmount::new(category.name.clone(), line.projected_amount());
            match category.category_type {
                CategoryType::Income => income.push(named),
                CategoryType::Expense => expenses.push(named),
            }
        }

        let analysis =
            Self::analyze(budget.total_income(), budget.total_expenses(), &income, &expenses);
        debug!(
            budget_id = %budget.id,
            severity = ?analysis.severity,
            recommendations = analysis.recommendations.len(),
            "Budget analyzed"
        );
        Ok(analysis)
    }

    fn shares(lines: &[NamedAmount], total: Decimal) -> Vec<CategoryShare> {
        let mut sums: HashMap<&str, Decimal> = HashMap::new();
        for line in lines {
            *sums.entry(line.category.as_str()).or_default() += line.amount;
        }

        let mut shares: Vec<CategoryShare> = sums
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category: category.to_string(),
                amount,
                share_pct: share_pct(amount, total),
            })
            .collect();
        shares.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
        shares
    }

    fn recommend(margin: Ratio, income: Decimal, expenses: Decimal) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        match margin {
            Ratio::Undefined {
                reason: UndefinedReason::ZeroIncome,
            } => recommendations.push(Recommendation {
                kind: RecommendationKind::Deficit,
                severity: Severity::High,
                message: format!(
                    "No income is planned against {expenses} of expenses. Identify revenue sources or cut spending."
                ),
            }),
            Ratio::Defined { value } if value < Decimal::ZERO => {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Deficit,
                    severity: Severity::High,
                    message: format!(
                        "Expenses exceed income by {}. Review expense lines or raise income.",
                        expenses - income
                    ),
                });
            }
            Ratio::Defined { value } if value < TIGHT_MARGIN_PCT => {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::TightMargin,
                    severity: Severity::Medium,
                    message: "The margin is tight. Keep a reserve for unplanned maintenance."
                        .to_string(),
                });
            }
            Ratio::Defined { value } if value >= HEALTHY_MARGIN_PCT => {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Healthy,
                    severity: Severity::Info,
                    message: "The margin is healthy. Consider investing the surplus in park improvements."
                        .to_string(),
                });
            }
            Ratio::Undefined {
                reason: UndefinedReason::Overflow,
            } if expenses > income => recommendations.push(Recommendation {
                kind: RecommendationKind::Deficit,
                severity: Severity::High,
                message: format!(
                    "Expenses exceed income by {}. Review expense lines or raise income.",
                    expenses - income
                ),
            }),
            Ratio::Defined { .. } | Ratio::Undefined { .. } => {}
        }

        recommendations.push(Recommendation {
            kind: RecommendationKind::Diversification,
            severity: Severity::Info,
            message: "Diversify income across donations, fees and grants to reduce dependence on any single source."
                .to_string(),
        });

        recommendations
    }
}
