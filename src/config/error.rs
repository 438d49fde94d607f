//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Sigma divisor must be a positive finite number, got {0}")]
    InvalidSigmaDivisor(f64),

    #[error("Max column divisor must be at least 1")]
    InvalidColumnDivisor,

    #[error("Standard item count must be positive")]
    InvalidStandardItemCount,

    #[error("Short session ceiling ({ceiling}) exceeds the standard item count ({standard})")]
    CeilingAboveStandard { ceiling: u32, standard: u32 },

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
