//! Configuration module for the credit position engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use credit_position_engine::config::load_config;
//!
//! // Load from default path (config.yaml), falling back to defaults if absent
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("carbon price: {}", config.market.carbon_price);
//! ```

mod engine;
mod input;
mod market;
mod observability;
mod report;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use engine::EngineConfig;
pub use input::InputConfig;
pub use market::MarketConfig;
pub use observability::{LogFormat, LoggingConfig, MetricsConfig, ObservabilityConfig};
pub use report::ReportConfig;

use crate::domain::credit_position::{
    CreditPositionCalculator, CreditPositionError, MarketConfiguration,
};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Largest accepted `report.decimal_places`.
const MAX_DECIMAL_PLACES: u32 = 10;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),

    /// Market values rejected by the domain.
    #[error("Invalid market configuration: {0}")]
    Market(#[source] CreditPositionError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Threshold intensity and carbon price.
    #[serde(default)]
    pub market: MarketConfig,
    /// Company batch input.
    #[serde(default)]
    pub input: InputConfig,
    /// Report presentation.
    #[serde(default)]
    pub report: ReportConfig,
    /// Calculator tuning.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging and metrics.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Domain market configuration.
    pub fn market_configuration(&self) -> Result<MarketConfiguration, ConfigError> {
        MarketConfiguration::new(self.market.threshold_intensity, self.market.carbon_price)
            .map_err(ConfigError::Market)
    }

    /// Calculator wired with the market and engine sections.
    pub fn calculator(&self) -> Result<CreditPositionCalculator, ConfigError> {
        Ok(CreditPositionCalculator::new(self.market_configuration()?)
            .with_parallel_threshold(self.engine.parallel_threshold))
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// With `path = None` the default `config.yaml` is used if it exists; otherwise
/// built-in defaults apply. An explicit path must exist.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let explicit = path.is_some();
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if !explicit && !Path::new(path).exists() {
        tracing::debug!(path, "No config file found, using defaults");
        let config = Config::default();
        validate_config(&config)?;
        return Ok(config);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config.market_configuration()?;

    if config.report.decimal_places > MAX_DECIMAL_PLACES {
        return Err(ConfigError::ValidationError(format!(
            "report.decimal_places must be at most {MAX_DECIMAL_PLACES}"
        )));
    }

    if config.report.currency.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.currency must not be empty".to_string(),
        ));
    }

    if config.engine.parallel_threshold == 0 {
        return Err(ConfigError::ValidationError(
            "engine.parallel_threshold must be at least 1".to_string(),
        ));
    }

    let level = config.observability.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {LOG_LEVELS:?}"
        )));
    }

    if config.observability.metrics.enabled && config.observability.metrics.export_path.is_none() {
        tracing::warn!("Metrics enabled without export_path; snapshot will not be written");
    }

    Ok(())
}

pub(crate) const fn default_true() -> bool {
    true
}
