//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations. Every operation here is a
//! synchronous query; the engine holds no state between calls.

pub mod handlers;

pub use handlers::{
    GenerateDistributionHandler, GenerateDistributionQuery, GenerateDistributionResult,
    GetGridConfigHandler, GetGridConfigQuery, GetGridConfigResult, RecommendGridHandler,
    RecommendGridQuery, RecommendGridResult, ValidateDistributionHandler,
    ValidateDistributionQuery, DEFAULT_INSTRUCTIONS,
};

use crate::config::AppConfig;
use crate::domain::grid::DistributionCorrector;
use crate::domain::recommendation::RecommendationEngine;

/// All grid handlers, wired from one configuration.
pub struct GridService {
    pub generate: GenerateDistributionHandler,
    pub validate: ValidateDistributionHandler,
    pub get_config: GetGridConfigHandler,
    pub recommend: RecommendGridHandler,
}

impl GridService {
    pub fn from_config(config: &AppConfig) -> Self {
        let strategy = config.correction.strategy;
        let engine = RecommendationEngine::new(
            config.recommendation.policy(),
            DistributionCorrector::new(strategy),
        );
        Self {
            generate: GenerateDistributionHandler::new(config.generator.settings()),
            validate: ValidateDistributionHandler::new(),
            get_config: GetGridConfigHandler::new(strategy),
            recommend: RecommendGridHandler::new(engine),
        }
    }
}

impl Default for GridService {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::CorrectionStrategy;

    #[test]
    fn service_honors_configured_generator() {
        let mut config = AppConfig::default();
        config.generator.sharpen_peak = false;
        let service = GridService::from_config(&config);
        let grid = service
            .generate
            .handle(GenerateDistributionQuery {
                min: -4,
                max: 4,
                total_items: 36,
                instructions: None,
            })
            .unwrap();
        assert_eq!(grid.distribution().as_slice(), &[2, 3, 4, 6, 6, 6, 4, 3, 2]);
    }

    #[test]
    fn service_honors_configured_strategy() {
        let mut config = AppConfig::default();
        config.correction.strategy = CorrectionStrategy::Center;
        let service = GridService::from_config(&config);
        let result = service
            .get_config
            .handle(GetGridConfigQuery {
                id: "extended-42".to_string(),
            })
            .unwrap();
        assert_eq!(result.config.distribution.as_slice(), &[2, 3, 5, 6, 10, 6, 5, 3, 2]);
    }
}
