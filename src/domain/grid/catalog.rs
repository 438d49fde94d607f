//! Config Catalog - Vetted, citation-backed reference grids.
//!
//! The table is built once on first access and is read-only afterwards.
//! Raw `distribution` fields are stored as authored and may not sum to
//! `total_items`; callers go through the corrector before exposing them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ScaleRange};

use super::Distribution;

/// Id of the most validated nine-point entry.
pub const OPTIMAL_STANDARD_ID: &str = "optimal-36";

/// Id of the entry preferred for large exploratory studies.
pub const EXTENDED_ID: &str = "extended-42";

/// Expertise a researcher needs to administer a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExpertiseLevel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ExpertiseLevel::Beginner => "beginner",
            ExpertiseLevel::Intermediate => "intermediate",
            ExpertiseLevel::Advanced => "advanced",
        }
    }
}

/// A named catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardGridConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub range: ScaleRange,
    pub total_items: u32,
    pub distribution: Distribution,
    pub recommended_for: Vec<String>,
    pub expertise_level: ExpertiseLevel,
    pub time_estimate: String,
    pub citation: String,
}

impl StandardGridConfig {
    pub fn columns(&self) -> usize {
        self.range.columns()
    }
}

struct CatalogSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    range: ScaleRange,
    total_items: u32,
    distribution: &'static [u32],
    recommended_for: &'static [&'static str],
    expertise_level: ExpertiseLevel,
    time_estimate: &'static str,
    citation: &'static str,
}

// Ordered by ascending item count. beginner-25, extended-42 and expert-49
// are authored short of their totals.
const SEEDS: &[CatalogSeed] = &[
    CatalogSeed {
        id: "beginner-25",
        name: "Beginner 7-Point Grid",
        description: "Seven-column grid with a shallow curve for first-time sorters.",
        range: ScaleRange::from_literal(-3, 3),
        total_items: 25,
        distribution: &[2, 3, 4, 6, 4, 3, 2],
        recommended_for: &["first-time participants", "general public", "pilot studies"],
        expertise_level: ExpertiseLevel::Beginner,
        time_estimate: "15-20 minutes",
        citation: "Watts, S. & Stenner, P. (2012). Doing Q Methodological Research: Theory, Method and Interpretation. SAGE.",
    },
    CatalogSeed {
        id: "compact-30",
        name: "Compact 7-Point Grid",
        description: "Seven-column grid with a steeper center for short sessions.",
        range: ScaleRange::from_literal(-3, 3),
        total_items: 30,
        distribution: &[2, 4, 5, 8, 5, 4, 2],
        recommended_for: &["short sessions", "online administration", "general public"],
        expertise_level: ExpertiseLevel::Beginner,
        time_estimate: "20-25 minutes",
        citation: "Brown, S. R. (1980). Political Subjectivity: Applications of Q Methodology in Political Science. Yale University Press.",
    },
    CatalogSeed {
        id: OPTIMAL_STANDARD_ID,
        name: "Optimal Standard 9-Point Grid",
        description: "The nine-column quasi-normal grid most often reported in the literature.",
        range: ScaleRange::from_literal(-4, 4),
        total_items: 36,
        distribution: &[2, 3, 4, 5, 8, 5, 4, 3, 2],
        recommended_for: &["confirmatory studies", "most research contexts", "mixed audiences"],
        expertise_level: ExpertiseLevel::Intermediate,
        time_estimate: "25-35 minutes",
        citation: "Brown, S. R. (1993). A Primer on Q Methodology. Operant Subjectivity, 16(3/4), 91-138.",
    },
    CatalogSeed {
        id: EXTENDED_ID,
        name: "Extended 9-Point Grid",
        description: "Nine-column grid with a larger concourse sample for exploratory work.",
        range: ScaleRange::from_literal(-4, 4),
        total_items: 42,
        distribution: &[2, 3, 5, 6, 8, 6, 5, 3, 2],
        recommended_for: &["exploratory studies", "large participant groups", "broad concourses"],
        expertise_level: ExpertiseLevel::Intermediate,
        time_estimate: "35-45 minutes",
        citation: "McKeown, B. & Thomas, D. B. (2013). Q Methodology (2nd ed.). SAGE.",
    },
    CatalogSeed {
        id: "expert-49",
        name: "Expert 11-Point Grid",
        description: "Eleven-column grid giving expert sorters fine-grained discrimination.",
        range: ScaleRange::from_literal(-5, 5),
        total_items: 49,
        distribution: &[2, 3, 4, 5, 6, 8, 6, 5, 4, 3, 2],
        recommended_for: &["expert participants", "complex topics", "fine discrimination"],
        expertise_level: ExpertiseLevel::Advanced,
        time_estimate: "45-60 minutes",
        citation: "Stephenson, W. (1953). The Study of Behavior: Q-Technique and Its Methodology. University of Chicago Press.",
    },
];

static CATALOG: Lazy<Vec<StandardGridConfig>> = Lazy::new(|| {
    SEEDS
        .iter()
        .map(|seed| StandardGridConfig {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            range: seed.range,
            total_items: seed.total_items,
            distribution: Distribution::new(seed.distribution.to_vec()),
            recommended_for: seed.recommended_for.iter().map(|s| s.to_string()).collect(),
            expertise_level: seed.expertise_level,
            time_estimate: seed.time_estimate.to_string(),
            citation: seed.citation.to_string(),
        })
        .collect()
});

/// All catalog entries, ordered by ascending item count.
pub fn catalog() -> &'static [StandardGridConfig] {
    &CATALOG
}

/// Looks up an entry by id. The returned distribution is raw.
pub fn get_config_by_id(id: &str) -> Option<&'static StandardGridConfig> {
    catalog().iter().find(|c| c.id == id)
}

/// Looks up an entry by id, failing with `ConfigNotFound`.
pub fn require_config(id: &str) -> Result<&'static StandardGridConfig, DomainError> {
    get_config_by_id(id).ok_or_else(|| {
        DomainError::new(
            ErrorCode::ConfigNotFound,
            format!("No catalog entry with id '{}'", id),
        )
        .with_detail("id", id)
    })
}

/// Entries defined over exactly `range`.
pub fn configs_for_range(range: ScaleRange) -> impl Iterator<Item = &'static StandardGridConfig> {
    catalog().iter().filter(move |c| c.range == range)
}

/// Entry with the most columns; the larger item count breaks ties.
pub fn widest() -> &'static StandardGridConfig {
    catalog()
        .iter()
        .fold(&catalog()[0], |best, c| {
            if (c.columns(), c.total_items) > (best.columns(), best.total_items) {
                c
            } else {
                best
            }
        })
}

/// Entry with the fewest columns; the smaller item count breaks ties.
pub fn simplest() -> &'static StandardGridConfig {
    catalog()
        .iter()
        .fold(&catalog()[0], |best, c| {
            if (c.columns(), c.total_items) < (best.columns(), best.total_items) {
                c
            } else {
                best
            }
        })
}

/// The entry with the largest item count strictly below `config`'s.
pub fn next_smaller(config: &StandardGridConfig) -> Option<&'static StandardGridConfig> {
    catalog()
        .iter()
        .filter(|c| c.total_items < config.total_items)
        .max_by_key(|c| c.total_items)
}
