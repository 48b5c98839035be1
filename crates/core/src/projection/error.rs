//! Projection error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the projection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// Base income or expenses are negative.
    #[error("Invalid base summary: income {income}, expenses {expenses} must not be negative")]
    InvalidBaseSummary {
        /// Base income.
        income: Decimal,
        /// Base expenses.
        expenses: Decimal,
    },

    /// Horizon beyond the supported number of years.
    #[error("Projection horizon of {years} years exceeds the maximum of {max}")]
    InvalidHorizon {
        /// Requested years.
        years: u32,
        /// Maximum years.
        max: u32,
    },

    /// Inflation outside (-100, 100], or a combined income rate below -100%.
    #[error("Invalid inflation rate: {0}%")]
    InvalidInflationRate(Decimal),

    /// Compounded value does not fit in a decimal.
    #[error("Projection overflowed at year offset {0}")]
    Overflow(u32),

    /// Scenario name not recognised.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}
