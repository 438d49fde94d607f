//! ValidateDistributionHandler - Scores a live (possibly hand-edited) grid.
//!
//! Never fails: structural problems come back as issues on the result.

use tracing::debug;

use crate::domain::grid::{Distribution, DistributionValidator, ValidationResult};

/// Query to validate a distribution.
#[derive(Debug, Clone)]
pub struct ValidateDistributionQuery {
    pub distribution: Distribution,
    pub total_items: u32,
}

/// Handler for validating distributions.
#[derive(Debug, Default)]
pub struct ValidateDistributionHandler;

impl ValidateDistributionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: &ValidateDistributionQuery) -> ValidationResult {
        let result = DistributionValidator::validate(&query.distribution, query.total_items);
        debug!(
            total_items = query.total_items,
            score = result.score.value(),
            issues = result.issues.len(),
            "validated distribution"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_edited_grid_loses_points() {
        let handler = ValidateDistributionHandler::new();
        let result = handler.handle(&ValidateDistributionQuery {
            distribution: Distribution::new(vec![2, 3, 4, 5, 8, 5, 4, 4, 2]),
            total_items: 36,
        });
        assert!(!result.is_valid);
        assert_eq!(result.score.value(), 100 - 30 - 20);
    }

    #[test]
    fn canonical_grid_is_valid() {
        let result = ValidateDistributionHandler::new().handle(&ValidateDistributionQuery {
            distribution: Distribution::new(vec![2, 3, 4, 7, 4, 3, 2]),
            total_items: 25,
        });
        assert!(result.is_valid);
    }
}
