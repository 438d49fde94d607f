//! Qualitative study classification fed to the recommendation engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyType {
    Exploratory,
    Confirmatory,
    Comparative,
    Descriptive,
}

/// How familiar participants are with the topic being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantExpertise {
    /// Lay members of the public with no prior exposure to the topic.
    Novice,
    /// Everyday familiarity; the typical participant pool.
    ///
    /// Does not trigger the short-session `novice_short` rule; only `Novice` does.
    General,
    /// Domain specialists.
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConstraint {
    Short,
    Medium,
    Long,
}

/// The researcher's own history with Q studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviousExperience {
    None,
    Some,
    Extensive,
}

/// Input to `RecommendationEngine::recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyParameters {
    pub study_type: StudyType,
    pub participant_count: u32,
    pub participant_expertise: ParticipantExpertise,
    pub complexity_level: ComplexityLevel,
    pub time_constraint: TimeConstraint,
    pub previous_experience: PreviousExperience,
}

impl Default for StudyParameters {
    fn default() -> Self {
        Self {
            study_type: StudyType::Confirmatory,
            participant_count: 20,
            participant_expertise: ParticipantExpertise::General,
            complexity_level: ComplexityLevel::Moderate,
            time_constraint: TimeConstraint::Medium,
            previous_experience: PreviousExperience::Some,
        }
    }
}
