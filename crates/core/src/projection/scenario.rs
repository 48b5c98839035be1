//! Named growth scenarios.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProjectionError;

/// Growth assumption applied to income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// +15% per year.
    Optimistic,
    /// +8% per year.
    #[default]
    Realistic,
    /// -5% per year.
    Pessimistic,
}

impl Scenario {
    /// All scenarios, best first.
    pub const ALL: [Self; 3] = [Self::Optimistic, Self::Realistic, Self::Pessimistic];

    /// Annual income growth in percent.
    #[must_use]
    pub const fn growth_rate_pct(self) -> Decimal {
        match self {
            Self::Optimistic => Decimal::from_parts(15, 0, 0, false, 0),
            Self::Realistic => Decimal::from_parts(8, 0, 0, false, 0),
            Self::Pessimistic => Decimal::from_parts(5, 0, 0, true, 0),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Realistic => "realistic",
            Self::Pessimistic => "pessimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProjectionError::UnknownScenario(s.to_string()))
    }
}
