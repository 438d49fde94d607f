//! Distribution generator configuration

use serde::Deserialize;

use crate::domain::grid::GeneratorSettings;

use super::error::ValidationError;

/// Gaussian kernel and clamp tunables
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// `sigma = columns / sigma_divisor`
    #[serde(default = "default_sigma_divisor")]
    pub sigma_divisor: f64,

    /// Interior columns are capped at `total / max_column_divisor`
    #[serde(default = "default_max_column_divisor")]
    pub max_column_divisor: u32,

    /// Enforce strictly rising counts toward the center
    #[serde(default = "default_sharpen_peak")]
    pub sharpen_peak: bool,
}

impl GeneratorConfig {
    /// Domain settings for the generator
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            sigma_divisor: self.sigma_divisor,
            max_column_divisor: self.max_column_divisor,
            sharpen_peak: self.sharpen_peak,
        }
    }

    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.sigma_divisor.is_finite() || self.sigma_divisor <= 0.0 {
            return Err(ValidationError::InvalidSigmaDivisor(self.sigma_divisor));
        }
        if self.max_column_divisor == 0 {
            return Err(ValidationError::InvalidColumnDivisor);
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sigma_divisor: default_sigma_divisor(),
            max_column_divisor: default_max_column_divisor(),
            sharpen_peak: default_sharpen_peak(),
        }
    }
}

fn default_sigma_divisor() -> f64 {
    3.5
}

fn default_max_column_divisor() -> u32 {
    4
}

fn default_sharpen_peak() -> bool {
    true
}
