//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QSORT_GRID` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use qsort_grid::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sigma divisor: {}", config.generator.sigma_divisor);
//! ```

mod error;
mod generator;
mod logging;
mod recommendation;

pub use error::{ConfigError, ValidationError};
pub use generator::GeneratorConfig;
pub use logging::LoggingConfig;
pub use recommendation::{CorrectionConfig, RecommendationConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Distribution generator tunables
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Catalog correction strategy
    #[serde(default)]
    pub correction: CorrectionConfig,

    /// Recommendation thresholds
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QSORT_GRID` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QSORT_GRID__GENERATOR__SIGMA_DIVISOR=3.5` -> `generator.sigma_divisor = 3.5`
    /// - `QSORT_GRID__CORRECTION__STRATEGY=center` -> `correction.strategy = center`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QSORT_GRID")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.generator.validate()?;
        self.recommendation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
