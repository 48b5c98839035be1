//! Budget and cash-flow analytics engine for ParkFin.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every computation is a deterministic function of its inputs.
//!
//! # Modules
//!
//! - `catalog` - Income/expense categories and their display hierarchy
//! - `budget` - Budgets, budget lines, monthly distribution and lifecycle
//! - `actuals` - Realized per-month amounts and their providers
//! - `cashflow` - Projected vs real matrix with per-month variance
//! - `summary` - Monthly and annual roll-ups of the matrix
//! - `projection` - Multi-year projections under growth scenarios
//! - `analytics` - Ratios, category shares and recommendations for one budget

pub mod actuals;
pub mod analytics;
pub mod budget;
pub mod cashflow;
pub mod catalog;
pub mod projection;
pub mod summary;

/// Number of months in a budget year.
pub const MONTHS: usize = 12;

/// Twelve monthly values, January first.
pub type MonthlyVector = [rust_decimal::Decimal; MONTHS];
