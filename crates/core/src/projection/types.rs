//! Projection data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::scenario::Scenario;
use crate::summary::{AnnualSummary, CashFlowSummary};

/// Default number of projected years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 3;

/// Longest supported horizon.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Parameters for a projection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Growth scenario for income.
    pub scenario: Scenario,
    /// Annual inflation in percent (3.5 means 3.5%).
    pub inflation_rate_pct: Decimal,
    /// Number of years after the base year.
    pub years: u32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            inflation_rate_pct: Decimal::ZERO,
            years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

/// One projected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// Calendar year.
    pub year: i32,
    /// Projected income.
    pub income: Decimal,
    /// Projected expenses.
    pub expenses: Decimal,
    /// `income - expenses`.
    pub net: Decimal,
    /// Scenario used.
    pub scenario: Scenario,
    /// Inflation used, in percent.
    pub inflation_rate_pct: Decimal,
}

/// Which annual series of a cash-flow report feeds the projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionBasis {
    /// Planned totals.
    #[default]
    Projected,
    /// Realized totals.
    Real,
}

impl ProjectionBasis {
    /// Picks the base annual summary from a cash-flow summary.
    #[must_use]
    pub const fn select(self, summary: &CashFlowSummary) -> AnnualSummary {
        match self {
            Self::Projected => summary.projected_annual,
            Self::Real => summary.real_annual,
        }
    }
}
