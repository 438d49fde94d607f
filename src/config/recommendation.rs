//! Recommendation and correction configuration

use serde::Deserialize;

use crate::domain::grid::CorrectionStrategy;
use crate::domain::recommendation::RecommendationPolicy;

use super::error::ValidationError;

/// How catalog distributions are brought to their declared totals
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectionConfig {
    /// `symmetric` (default) or `center`
    #[serde(default)]
    pub strategy: CorrectionStrategy,
}

/// Item-count thresholds used by the recommendation adjustments
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Largest grid suggested to first-time researchers
    #[serde(default = "default_standard_item_count")]
    pub standard_item_count: u32,

    /// Largest grid suggested for short sessions
    #[serde(default = "default_short_session_item_ceiling")]
    pub short_session_item_ceiling: u32,
}

impl RecommendationConfig {
    /// Domain policy for the recommendation engine
    pub fn policy(&self) -> RecommendationPolicy {
        RecommendationPolicy {
            standard_item_count: self.standard_item_count,
            short_session_item_ceiling: self.short_session_item_ceiling,
        }
    }

    /// Validate recommendation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.standard_item_count == 0 {
            return Err(ValidationError::InvalidStandardItemCount);
        }
        if self.short_session_item_ceiling > self.standard_item_count {
            return Err(ValidationError::CeilingAboveStandard {
                ceiling: self.short_session_item_ceiling,
                standard: self.standard_item_count,
            });
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            standard_item_count: default_standard_item_count(),
            short_session_item_ceiling: default_short_session_item_ceiling(),
        }
    }
}

fn default_standard_item_count() -> u32 {
    36
}

fn default_short_session_item_ceiling() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_defaults() {
        let config = RecommendationConfig::default();
        assert_eq!(config.policy(), RecommendationPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ceiling_above_standard_rejected() {
        let config = RecommendationConfig {
            standard_item_count: 30,
            short_session_item_ceiling: 36,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::CeilingAboveStandard {
                ceiling: 36,
                standard: 30
            })
        );
    }

    #[test]
    fn test_correction_strategy_deserialization() {
        let config: CorrectionConfig = serde_json::from_str(r#"{"strategy": "center"}"#).unwrap();
        assert_eq!(config.strategy, CorrectionStrategy::Center);

        let config: CorrectionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.strategy, CorrectionStrategy::Symmetric);
    }
}
