//! RecommendGridHandler - Seeds a study's grid from its qualitative parameters.
//!
//! Returns the recommendation together with the selected grid's quality
//! score and rationale, which is what the grid builder shows on first load.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::grid::{configuration_rationale, DistributionValidator, ValidationResult};
use crate::domain::recommendation::{GridRecommendation, RecommendationEngine, StudyParameters};

/// Query for a grid recommendation.
#[derive(Debug, Clone)]
pub struct RecommendGridQuery {
    pub params: StudyParameters,
}

/// Recommendation plus the selected grid's score and explanation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendGridResult {
    pub recommendation: GridRecommendation,
    pub validation: ValidationResult,
    pub rationale: Vec<String>,
}

/// Handler for grid recommendations.
pub struct RecommendGridHandler {
    engine: RecommendationEngine,
}

impl RecommendGridHandler {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: &RecommendGridQuery) -> Result<RecommendGridResult, DomainError> {
        let recommendation = self.engine.recommend(&query.params).map_err(|e| {
            warn!(params = ?query.params, "recommendation failed: {}", e);
            e
        })?;

        let config = &recommendation.config;
        let validation = DistributionValidator::validate(&config.distribution, config.total_items);
        let rationale = configuration_rationale(config);

        debug!(
            rule = %recommendation.matched_rule,
            config = %config.id,
            confidence = recommendation.confidence.value(),
            score = validation.score.value(),
            alternatives = recommendation.alternatives.len(),
            "recommended grid"
        );

        Ok(RecommendGridResult {
            recommendation,
            validation,
            rationale,
        })
    }
}

impl Default for RecommendGridHandler {
    fn default() -> Self {
        Self::new(RecommendationEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::TimeConstraint;

    #[test]
    fn recommended_grid_scores_100() {
        let result = RecommendGridHandler::default()
            .handle(&RecommendGridQuery {
                params: StudyParameters::default(),
            })
            .unwrap();
        assert_eq!(result.recommendation.config.id, "optimal-36");
        assert!(result.validation.is_valid);
        assert_eq!(result.validation.score.value(), 100);
        assert!(!result.rationale.is_empty());
    }

    #[test]
    fn result_serializes_for_the_ui() {
        let result = RecommendGridHandler::default()
            .handle(&RecommendGridQuery {
                params: StudyParameters {
                    time_constraint: TimeConstraint::Short,
                    ..Default::default()
                },
            })
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["recommendation"]["config"]["id"], "compact-30");
        assert_eq!(json["recommendation"]["confidence"], 87);
        assert_eq!(json["recommendation"]["matchedRule"], "confirmatory_moderate");
        assert_eq!(json["validation"]["isValid"], true);
    }
}
