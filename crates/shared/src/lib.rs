//! Shared types, errors, and configuration for ParkFin.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for categories, budgets, budget lines and parks
//! - Presentation rounding for currency and percentage values
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyticsConfig, AppConfig, DataConfig, ServerConfig};
pub use error::{AppError, AppResult};
