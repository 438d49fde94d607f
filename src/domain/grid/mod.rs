//! Grid Module - Q-sort grid shapes and the services that build and check them.
//!
//! # Components
//!
//! - `ConfigCatalog` - Read-only table of citation-backed reference grids
//! - `DistributionCorrector` - Brings authored distributions to their exact totals
//! - `DistributionGenerator` - Symmetric bell-shaped allocation for any range/total
//! - `DistributionValidator` - Structural score (0-100) for any distribution
//!
//! # Design Philosophy
//!
//! Everything here is pure and synchronous. The catalog is the only
//! long-lived state and it is never mutated after initialization.

mod catalog;
mod column;
mod corrector;
mod generator;
mod rationale;
mod validator;

pub use catalog::{
    catalog, configs_for_range, get_config_by_id, next_smaller, require_config, simplest, widest,
    ExpertiseLevel, StandardGridConfig, EXTENDED_ID, OPTIMAL_STANDARD_ID,
};
pub use column::{Distribution, GridColumn, GridConfiguration};
pub use corrector::{CorrectionStrategy, DistributionCorrector};
pub use generator::{DistributionGenerator, GeneratorSettings, EDGE_MINIMUM};
pub use rationale::configuration_rationale;
pub use validator::{
    DistributionValidator, ValidationResult, ASYMMETRY_PENALTY, EDGE_MINIMUM_PENALTY,
    FLAT_CENTER_PENALTY, NON_MONOTONIC_PENALTY, SUM_MISMATCH_PENALTY,
};

use crate::domain::foundation::{DomainError, ScaleRange};

/// Generates a distribution with default settings.
pub fn generate_distribution(
    range: ScaleRange,
    total_items: u32,
) -> Result<Distribution, DomainError> {
    DistributionGenerator::default().generate(range, total_items)
}

/// Scores a distribution; never fails.
pub fn validate_distribution(distribution: &Distribution, total_items: u32) -> ValidationResult {
    DistributionValidator::validate(distribution, total_items)
}

/// Catalog entry with its distribution corrected by the default strategy.
pub fn corrected_config(id: &str) -> Result<StandardGridConfig, DomainError> {
    DistributionCorrector::default().corrected(require_config(id)?)
}
