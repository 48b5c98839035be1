//! Realized per-month amounts and the providers that supply them.

pub mod provider;
pub mod synthetic;
pub mod types;

pub use provider::{ActualsProvider, RecordedActuals};
pub use synthetic::SyntheticActuals;
pub use types::ActualEntry;
