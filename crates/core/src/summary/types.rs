//! Summary types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::BudgetScope;
use crate::{MONTHS, MonthlyVector};

/// Income, expenses and net for each month of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSeries {
    /// Income per month.
    pub income: MonthlyVector,
    /// Expenses per month.
    pub expenses: MonthlyVector,
    /// `income - expenses` per month.
    pub net: MonthlyVector,
}

impl FlowSeries {
    /// Builds the series, deriving net month by month.
    #[must_use]
    pub fn new(income: MonthlyVector, expenses: MonthlyVector) -> Self {
        let mut net = [Decimal::ZERO; MONTHS];
        for (slot, (i, e)) in net.iter_mut().zip(income.iter().zip(&expenses)) {
            *slot = *i - *e;
        }
        Self {
            income,
            expenses,
            net,
        }
    }

    /// Annual totals of this series.
    #[must_use]
    pub fn annual(&self, year: i32) -> AnnualSummary {
        AnnualSummary::new(
            year,
            self.income.iter().copied().sum(),
            self.expenses.iter().copied().sum(),
        )
    }
}

/// Annual income, expenses and net.
///
/// Net is derived on construction and never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualSummary {
    year: i32,
    income: Decimal,
    expenses: Decimal,
    net: Decimal,
}

impl AnnualSummary {
    /// Creates a summary with `net = income - expenses`.
    #[must_use]
    pub fn new(year: i32, income: Decimal, expenses: Decimal) -> Self {
        Self {
            year,
            income,
            expenses,
            net: income - expenses,
        }
    }

    /// Year covered.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Total income.
    #[must_use]
    pub const fn income(&self) -> Decimal {
        self.income
    }

    /// Total expenses.
    #[must_use]
    pub const fn expenses(&self) -> Decimal {
        self.expenses
    }

    /// `income - expenses`.
    #[must_use]
    pub const fn net(&self) -> Decimal {
        self.net
    }
}

/// Variance percentages of income, expenses and net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowVariance {
    /// Income variance.
    pub income_pct: Decimal,
    /// Expense variance.
    pub expenses_pct: Decimal,
    /// Net variance, over `|projected net|`.
    pub net_pct: Decimal,
}

/// Monthly and annual roll-up of a cash-flow matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowSummary {
    /// Year covered.
    pub year: i32,
    /// Scope covered.
    pub scope: BudgetScope,
    /// Planned series per month.
    pub projected_monthly: FlowSeries,
    /// Realized series per month.
    pub real_monthly: FlowSeries,
    /// Planned annual totals.
    pub projected_annual: AnnualSummary,
    /// Realized annual totals.
    pub real_annual: AnnualSummary,
    /// Variance per month.
    pub monthly_variance: Vec<FlowVariance>,
    /// Variance of the annual totals.
    pub annual_variance: FlowVariance,
}
