//! Recommendation Engine - Picks and tunes a catalog grid for a study.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Percentage};
use crate::domain::grid::{
    catalog, next_smaller, require_config, DistributionCorrector, ExpertiseLevel,
    StandardGridConfig, OPTIMAL_STANDARD_ID,
};

use super::rules::{self, RecommendationRule};
use super::{ParticipantExpertise, PreviousExperience, StudyParameters, TimeConstraint};

/// Confidence lost when a short session forces a smaller grid.
pub const SHORT_SESSION_PENALTY: u8 = 5;

/// Confidence lost when an inexperienced researcher is moved to the standard grid.
pub const INEXPERIENCE_PENALTY: u8 = 3;

/// Maximum number of alternatives offered.
pub const MAX_ALTERNATIVES: usize = 2;

/// Item-count thresholds for the post-selection adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationPolicy {
    /// Grids above this size are downgraded for first-time researchers.
    pub standard_item_count: u32,
    /// Grids above this size are stepped down for short sessions.
    pub short_session_item_ceiling: u32,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            standard_item_count: 36,
            short_session_item_ceiling: 30,
        }
    }
}

/// A selected grid with its confidence, reasoning, and fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRecommendation {
    pub config: StandardGridConfig,
    pub confidence: Percentage,
    pub reasoning: Vec<String>,
    pub alternatives: Vec<StandardGridConfig>,
    pub matched_rule: String,
}

/// Applies the ordered rule list, then the size adjustments.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    policy: RecommendationPolicy,
    corrector: DistributionCorrector,
}

impl RecommendationEngine {
    pub fn new(policy: RecommendationPolicy, corrector: DistributionCorrector) -> Self {
        Self { policy, corrector }
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Recommends a grid for `params`.
    ///
    /// Every returned distribution has been corrected, and `reasoning` ends
    /// with the selected entry's citation.
    pub fn recommend(&self, params: &StudyParameters) -> Result<GridRecommendation, DomainError> {
        let rule: &RecommendationRule = rules::first_match(params);
        let mut selected = rule.target.resolve()?;
        let mut confidence = Percentage::new(rule.confidence);
        let mut reasoning = vec![rule.reason.to_string()];

        if params.time_constraint == TimeConstraint::Short
            && selected.total_items > self.policy.short_session_item_ceiling
        {
            if let Some(smaller) = next_smaller(selected) {
                reasoning.push(format!(
                    "Short sessions: stepped down from {} to {} items.",
                    selected.total_items, smaller.total_items
                ));
                selected = smaller;
                confidence = confidence.minus(SHORT_SESSION_PENALTY);
            }
        }

        if params.previous_experience == PreviousExperience::None
            && selected.total_items > self.policy.standard_item_count
        {
            let standard = require_config(OPTIMAL_STANDARD_ID)?;
            reasoning.push(format!(
                "First Q study: moved from {} to the {}-item standard grid.",
                selected.total_items, standard.total_items
            ));
            selected = standard;
            confidence = confidence.minus(INEXPERIENCE_PENALTY);
        }

        reasoning.push(format!(
            "{}: a {}-point scale ({}) with {} items, about {}.",
            selected.name,
            selected.columns(),
            selected.range,
            selected.total_items,
            selected.time_estimate
        ));
        reasoning.push(selected.citation.clone());

        let alternatives = self.alternatives(selected, params)?;

        Ok(GridRecommendation {
            config: self.corrector.corrected(selected)?,
            confidence,
            reasoning,
            alternatives,
            matched_rule: rule.name.to_string(),
        })
    }

    /// Remaining entries that respect the same hard constraints, corrected.
    fn alternatives(
        &self,
        selected: &StandardGridConfig,
        params: &StudyParameters,
    ) -> Result<Vec<StandardGridConfig>, DomainError> {
        catalog()
            .iter()
            .filter(|c| c.id != selected.id && self.is_compatible(c, params))
            .take(MAX_ALTERNATIVES)
            .map(|c| self.corrector.corrected(c))
            .collect()
    }

    fn is_compatible(&self, config: &StandardGridConfig, params: &StudyParameters) -> bool {
        if params.time_constraint == TimeConstraint::Short
            && config.total_items > self.policy.short_session_item_ceiling
        {
            return false;
        }
        if params.previous_experience == PreviousExperience::None
            && config.total_items > self.policy.standard_item_count
        {
            return false;
        }
        if params.participant_expertise == ParticipantExpertise::Novice
            && config.expertise_level == ExpertiseLevel::Advanced
        {
            return false;
        }
        true
    }
}
