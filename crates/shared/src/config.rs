//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Dataset and actuals feed configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Defaults for analytics queries.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Dataset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path of the JSON dataset holding categories, budgets, lines and actuals.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Replace recorded actuals with the deterministic synthetic feed.
    #[serde(default)]
    pub synthetic_actuals: bool,
    /// Seed for the synthetic feed.
    #[serde(default = "default_synthetic_seed")]
    pub synthetic_seed: u64,
    /// Maximum deviation (percent) the synthetic feed applies to a projected month.
    #[serde(default = "default_synthetic_variance_pct")]
    pub synthetic_variance_pct: Decimal,
}

fn default_dataset_path() -> String {
    "data/dataset.json".to_string()
}

fn default_synthetic_seed() -> u64 {
    42
}

fn default_synthetic_variance_pct() -> Decimal {
    Decimal::from(15)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            synthetic_actuals: false,
            synthetic_seed: default_synthetic_seed(),
            synthetic_variance_pct: default_synthetic_variance_pct(),
        }
    }
}

/// Defaults applied when a projection query omits parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Projection horizon in years.
    #[serde(default = "default_projection_years")]
    pub default_projection_years: u32,
    /// Annual inflation rate in percent.
    #[serde(default = "default_inflation_rate_pct")]
    pub default_inflation_rate_pct: Decimal,
    /// Growth scenario name (optimistic, realistic, pessimistic).
    #[serde(default = "default_scenario")]
    pub default_scenario: String,
}

fn default_projection_years() -> u32 {
    3
}

fn default_inflation_rate_pct() -> Decimal {
    Decimal::new(35, 1) // 3.5%
}

fn default_scenario() -> String {
    "realistic".to_string()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_projection_years: default_projection_years(),
            default_inflation_rate_pct: default_inflation_rate_pct(),
            default_scenario: default_scenario(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PARKFIN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
