//! Monthly and annual roll-ups of the cash-flow matrix.

pub mod aggregator;
pub mod types;


pub use aggregator::SummaryAggregator;
pub use types::{AnnualSummary, CashFlowSummary, FlowSeries, FlowVariance};
