//! Budget data types.

use parkfin_shared::types::{BudgetId, BudgetLineId, CategoryId, ParkId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::distribution::DistributionPolicy;
use super::error::{BudgetError, LineDefect};
use crate::catalog::{CategoryCatalog, CategoryType};
use crate::MonthlyVector;

/// Tolerance allowed between an explicit distribution's sum and the projected amount.
pub const DISTRIBUTION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Budget lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Being drafted; lines may change.
    Draft,
    /// Approved but not yet in force.
    Approved,
    /// The budget currently in force.
    Active,
    /// Closed; kept for history.
    Archived,
}

impl BudgetStatus {
    /// Whether lines may be added, replaced or removed.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Approved | Self::Archived)
                | (Self::Approved, Self::Active | Self::Draft)
                | (Self::Active, Self::Archived)
        )
    }

    /// Preference when several budgets cover the same year and scope (higher wins).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Active => 3,
            Self::Approved => 2,
            Self::Draft => 1,
            Self::Archived => 0,
        }
    }
}

/// What a budget covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "park_id", rename_all = "snake_case")]
pub enum BudgetScope {
    /// The whole municipality.
    #[default]
    Municipal,
    /// A single park.
    Park(ParkId),
}

impl std::fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Municipal => write!(f, "municipal"),
            Self::Park(id) => write!(f, "park:{id}"),
        }
    }
}

/// A budget record.
///
/// `total_income` and `total_expenses` are caches of the line sums and are only
/// written by [`Budget::recompute_totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Budget year.
    pub year: i32,
    /// Municipal or park scope.
    pub scope: BudgetScope,
    /// Lifecycle status.
    pub status: BudgetStatus,
    #[serde(default)]
    total_income: Decimal,
    #[serde(default)]
    total_expenses: Decimal,
}

impl Budget {
    /// Creates an empty draft budget.
    #[must_use]
    pub fn new(name: impl Into<String>, year: i32, scope: BudgetScope) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            year,
            scope,
            status: BudgetStatus::Draft,
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
        }
    }

    /// Sum of projected amounts of income lines.
    #[must_use]
    pub const fn total_income(&self) -> Decimal {
        self.total_income
    }

    /// Sum of projected amounts of expense lines.
    #[must_use]
    pub const fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }

    /// Recomputes the cached totals from this budget's lines.
    ///
    /// Lines of other budgets are ignored.
    pub fn recompute_totals(
        &mut self,
        lines: &[BudgetLine],
        catalog: &CategoryCatalog,
    ) -> Result<(), BudgetError> {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for line in lines.iter().filter(|l| l.budget_id() == self.id) {
            let category = catalog
                .get(line.category_id())
                .ok_or(BudgetError::UnknownCategory(line.category_id()))?;
            match category.category_type {
                CategoryType::Income => income += line.projected_amount(),
                CategoryType::Expense => expenses += line.projected_amount(),
            }
        }
        self.total_income = income;
        self.total_expenses = expenses;
        Ok(())
    }
}

/// Raw budget line as supplied by callers and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineInput {
    /// Line ID.
    #[serde(default)]
    pub id: BudgetLineId,
    /// Owning budget.
    pub budget_id: BudgetId,
    /// Category the amount is planned for.
    pub category_id: CategoryId,
    /// Free-text concept.
    pub concept: String,
    /// Planned amount for the year.
    pub projected_amount: Decimal,
    /// Explicit amounts for January..December.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_distribution: Option<Vec<Decimal>>,
    /// Policy used when no explicit distribution is given.
    #[serde(default)]
    pub distribution: DistributionPolicy,
}

/// A validated budget line carrying its monthly vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetLineInput", into = "BudgetLineInput")]
pub struct BudgetLine {
    id: BudgetLineId,
    budget_id: BudgetId,
    category_id: CategoryId,
    concept: String,
    projected_amount: Decimal,
    explicit: bool,
    distribution: DistributionPolicy,
    monthly: MonthlyVector,
}

impl BudgetLine {
    /// Validates a line and derives its monthly vector.
    ///
    /// An explicit `monthly_distribution` wins over the policy. It must hold
    /// twelve non-negative values summing to the projected amount.
    pub fn new(input: BudgetLineInput) -> Result<Self, BudgetError> {
        let invalid = |defect| BudgetError::InvalidBudgetLine {
            line_id: input.id,
            defect,
        };

        if input.projected_amount.is_sign_negative() && !input.projected_amount.is_zero() {
            return Err(invalid(LineDefect::NegativeAmount(input.projected_amount)));
        }

        let (monthly, explicit) = match &input.monthly_distribution {
            Some(values) => (
                Self::explicit_months(input.projected_amount, values).map_err(invalid)?,
                true,
            ),
            None => (
                input
                    .distribution
                    .distribute(input.projected_amount)
                    .map_err(invalid)?,
                false,
            ),
        };

        Ok(Self {
            id: input.id,
            budget_id: input.budget_id,
            category_id: input.category_id,
            concept: input.concept,
            projected_amount: input.projected_amount,
            explicit,
            distribution: input.distribution,
            monthly,
        })
    }

    fn explicit_months(expected: Decimal, values: &[Decimal]) -> Result<MonthlyVector, LineDefect> {
        let monthly: MonthlyVector = values
            .try_into()
            .map_err(|_| LineDefect::WrongMonthCount(values.len()))?;

        for (index, amount) in monthly.iter().enumerate() {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(LineDefect::NegativeMonth {
                    month: u8::try_from(index + 1).unwrap_or(u8::MAX),
                    amount: *amount,
                });
            }
        }

        let actual: Decimal = monthly.iter().copied().sum();
        if (actual - expected).abs() > DISTRIBUTION_TOLERANCE {
            return Err(LineDefect::DistributionMismatch { expected, actual });
        }

        Ok(monthly)
    }

    /// Line ID.
    #[must_use]
    pub const fn id(&self) -> BudgetLineId {
        self.id
    }

    /// Owning budget.
    #[must_use]
    pub const fn budget_id(&self) -> BudgetId {
        self.budget_id
    }

    /// Category ID.
    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Free-text concept.
    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Planned amount for the year.
    #[must_use]
    pub const fn projected_amount(&self) -> Decimal {
        self.projected_amount
    }

    /// Planned amount per month, January first.
    #[must_use]
    pub const fn monthly(&self) -> &MonthlyVector {
        &self.monthly
    }

    /// Whether the monthly vector was supplied rather than derived.
    #[must_use]
    pub const fn has_explicit_distribution(&self) -> bool {
        self.explicit
    }

    /// Copies this line into another budget under a fresh ID.
    #[must_use]
    pub fn copy_into(&self, budget_id: BudgetId) -> Self {
        Self {
            id: BudgetLineId::new(),
            budget_id,
            ..self.clone()
        }
    }
}

impl TryFrom<BudgetLineInput> for BudgetLine {
    type Error = BudgetError;

    fn try_from(input: BudgetLineInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl From<BudgetLine> for BudgetLineInput {
    fn from(line: BudgetLine) -> Self {
        Self {
            id: line.id,
            budget_id: line.budget_id,
            category_id: line.category_id,
            concept: line.concept,
            projected_amount: line.projected_amount,
            monthly_distribution: line.explicit.then(|| line.monthly.to_vec()),
            distribution: line.distribution,
        }
    }
}
