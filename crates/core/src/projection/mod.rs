//! Multi-year income and expense projections under growth scenarios.

pub mod engine;
pub mod error;
pub mod scenario;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::ProjectionEngine;
pub use error::ProjectionError;
pub use scenario::Scenario;
pub use types::{
    DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS, Projection, ProjectionBasis, ProjectionParams,
};
