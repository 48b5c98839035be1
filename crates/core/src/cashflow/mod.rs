//! Projected vs real cash-flow matrix.

pub mod builder;
pub mod error;
pub mod service;
pub mod types;
pub mod variance;


pub use builder::CashFlowMatrixBuilder;
pub use error::CashFlowError;
pub use service::{CashFlowReport, CashFlowService};
pub use types::{CashFlowCell, CashFlowMatrix, CategoryFlow};
pub use variance::{VarianceCase, VarianceDirection, net_variance_pct, variance_pct};
