//! Ordered recommendation rules; the first rule whose predicate holds wins.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::DomainError;
use crate::domain::grid::{
    require_config, simplest, widest, StandardGridConfig, EXTENDED_ID, OPTIMAL_STANDARD_ID,
};

use super::{ComplexityLevel, ParticipantExpertise, StudyParameters, StudyType, TimeConstraint};

/// Participant counts above this make an exploratory study "large".
pub const LARGE_STUDY_PARTICIPANTS: u32 = 30;

/// Which catalog entry a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTarget {
    Widest,
    Simplest,
    Extended,
    OptimalStandard,
}

impl CatalogTarget {
    /// Resolves the target against the catalog. The result is raw (uncorrected).
    pub fn resolve(&self) -> Result<&'static StandardGridConfig, DomainError> {
        match self {
            CatalogTarget::Widest => Ok(widest()),
            CatalogTarget::Simplest => Ok(simplest()),
            CatalogTarget::Extended => require_config(EXTENDED_ID),
            CatalogTarget::OptimalStandard => require_config(OPTIMAL_STANDARD_ID),
        }
    }
}

/// One `(predicate, outcome)` pair of the policy.
#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub name: &'static str,
    pub applies: fn(&StudyParameters) -> bool,
    pub target: CatalogTarget,
    pub confidence: u8,
    pub reason: &'static str,
}

impl fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("confidence", &self.confidence)
            .finish()
    }
}

fn expert_complex(p: &StudyParameters) -> bool {
    p.participant_expertise == ParticipantExpertise::Expert
        && p.complexity_level == ComplexityLevel::Complex
}

fn novice_short(p: &StudyParameters) -> bool {
    p.participant_expertise == ParticipantExpertise::Novice
        && p.time_constraint == TimeConstraint::Short
}

fn exploratory_large(p: &StudyParameters) -> bool {
    p.study_type == StudyType::Exploratory && p.participant_count > LARGE_STUDY_PARTICIPANTS
}

fn confirmatory_moderate(p: &StudyParameters) -> bool {
    p.study_type == StudyType::Confirmatory && p.complexity_level == ComplexityLevel::Moderate
}

fn always(_: &StudyParameters) -> bool {
    true
}

/// The policy, in priority order. The last rule always matches.
pub const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        name: "expert_complex",
        applies: expert_complex,
        target: CatalogTarget::Widest,
        confidence: 95,
        reason: "Expert participants sorting a complex topic can use the widest scale for finer discrimination.",
    },
    RecommendationRule {
        name: "novice_short",
        applies: novice_short,
        target: CatalogTarget::Simplest,
        confidence: 90,
        reason: "Lay participants with limited time are best served by the simplest seven-point scale.",
    },
    RecommendationRule {
        name: "exploratory_large",
        applies: exploratory_large,
        target: CatalogTarget::Extended,
        confidence: 88,
        reason: "A large exploratory study benefits from an extended item set to surface more viewpoints.",
    },
    RecommendationRule {
        name: "confirmatory_moderate",
        applies: confirmatory_moderate,
        target: CatalogTarget::OptimalStandard,
        confidence: 92,
        reason: "Confirmatory work on a moderately complex topic fits the most validated nine-point grid.",
    },
    RecommendationRule {
        name: "default",
        applies: always,
        target: CatalogTarget::OptimalStandard,
        confidence: 85,
        reason: "The optimal standard nine-point grid is a dependable default for most studies.",
    },
];

/// Returns the first rule whose predicate holds for `params`.
pub fn first_match(params: &StudyParameters) -> &'static RecommendationRule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(params))
        .unwrap_or(&RULES[RULES.len() - 1])
}
