//! GenerateDistributionHandler - Query handler for synthesizing a grid shape.
//!
//! Builds a symmetric bell-shaped distribution for a scale the catalog does
//! not cover and binds it to columns for the grid-editing UI.

use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ScaleRange};
use crate::domain::grid::{DistributionGenerator, GeneratorSettings, GridConfiguration};

/// Default participant instructions attached to generated grids.
pub const DEFAULT_INSTRUCTIONS: &str =
    "Sort each statement into a column, from most disagree on the left to most agree on the right.";

/// Query to generate a distribution.
#[derive(Debug, Clone)]
pub struct GenerateDistributionQuery {
    pub min: i32,
    pub max: i32,
    pub total_items: u32,
    /// Participant instructions; `DEFAULT_INSTRUCTIONS` when absent.
    pub instructions: Option<String>,
}

/// Result of a successful generation.
pub type GenerateDistributionResult = GridConfiguration;

/// Handler for generating distributions.
pub struct GenerateDistributionHandler {
    generator: DistributionGenerator,
}

impl GenerateDistributionHandler {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            generator: DistributionGenerator::new(settings),
        }
    }

    pub fn handle(
        &self,
        query: GenerateDistributionQuery,
    ) -> Result<GenerateDistributionResult, DomainError> {
        let result = ScaleRange::try_new(query.min, query.max).and_then(|range| {
            let distribution = self.generator.generate(range, query.total_items)?;
            let instructions = query
                .instructions
                .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string());
            GridConfiguration::from_distribution(range, distribution, instructions)
        });

        match &result {
            Ok(grid) => debug!(
                min = query.min,
                max = query.max,
                total_items = query.total_items,
                distribution = ?grid.distribution().as_slice(),
                "generated distribution"
            ),
            Err(e) => warn!(
                min = query.min,
                max = query.max,
                total_items = query.total_items,
                "distribution request rejected: {}",
                e
            ),
        }

        result
    }
}

impl Default for GenerateDistributionHandler {
    fn default() -> Self {
        Self::new(GeneratorSettings::default())
    }
}
