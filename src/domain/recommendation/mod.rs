//! Recommendation Module - Selects a catalog grid from qualitative study parameters.
//!
//! The policy is an ordered list of `(predicate, outcome)` rules; the first
//! match picks a catalog entry and a base confidence. Size adjustments for
//! short sessions and first-time researchers then run in order, each
//! lowering the confidence.

mod engine;
mod rules;
mod study_parameters;

pub use engine::{
    GridRecommendation, RecommendationEngine, RecommendationPolicy, INEXPERIENCE_PENALTY,
    MAX_ALTERNATIVES, SHORT_SESSION_PENALTY,
};
pub use rules::{first_match, CatalogTarget, RecommendationRule, LARGE_STUDY_PARTICIPANTS, RULES};
pub use study_parameters::{
    ComplexityLevel, ParticipantExpertise, PreviousExperience, StudyParameters, StudyType,
    TimeConstraint,
};

use crate::domain::foundation::DomainError;

/// Recommends a grid using the default policy and correction strategy.
pub fn get_recommendation(params: &StudyParameters) -> Result<GridRecommendation, DomainError> {
    RecommendationEngine::default().recommend(params)
}
