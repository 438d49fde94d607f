//! GetGridConfigHandler - Query handler for catalog lookups.
//!
//! Catalog distributions are never exposed raw; every entry returned here
//! has been through the corrector.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::grid::{
    catalog, configuration_rationale, require_config, CorrectionStrategy, DistributionCorrector,
    StandardGridConfig,
};

/// Query for a single catalog entry.
#[derive(Debug, Clone)]
pub struct GetGridConfigQuery {
    pub id: String,
}

/// A corrected catalog entry with its explanation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGridConfigResult {
    pub config: StandardGridConfig,
    pub rationale: Vec<String>,
}

/// Handler for catalog lookups.
pub struct GetGridConfigHandler {
    corrector: DistributionCorrector,
}

impl GetGridConfigHandler {
    pub fn new(strategy: CorrectionStrategy) -> Self {
        Self {
            corrector: DistributionCorrector::new(strategy),
        }
    }

    pub fn handle(&self, query: GetGridConfigQuery) -> Result<GetGridConfigResult, DomainError> {
        let raw = require_config(&query.id).map_err(|e| {
            warn!(id = %query.id, "unknown grid configuration");
            e
        })?;
        let config = self.correct(raw)?;
        let rationale = configuration_rationale(&config);
        Ok(GetGridConfigResult { config, rationale })
    }

    /// All catalog entries, corrected, in catalog order.
    pub fn list(&self) -> Result<Vec<StandardGridConfig>, DomainError> {
        catalog().iter().map(|raw| self.correct(raw)).collect()
    }

    fn correct(&self, raw: &StandardGridConfig) -> Result<StandardGridConfig, DomainError> {
        let config = self.corrector.corrected(raw)?;
        if config.distribution != raw.distribution {
            warn!(
                id = %raw.id,
                authored_total = raw.distribution.total(),
                declared_total = raw.total_items,
                "catalog distribution corrected"
            );
        } else {
            debug!(id = %raw.id, "catalog distribution already exact");
        }
        Ok(config)
    }
}

impl Default for GetGridConfigHandler {
    fn default() -> Self {
        Self::new(CorrectionStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn returns_corrected_entry_with_rationale() {
        let result = GetGridConfigHandler::default()
            .handle(GetGridConfigQuery {
                id: "beginner-25".to_string(),
            })
            .unwrap();
        assert_eq!(result.config.distribution.total(), 25);
        assert_eq!(result.rationale.last().unwrap(), &result.config.citation);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = GetGridConfigHandler::default()
            .handle(GetGridConfigQuery {
                id: "giant-100".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn list_corrects_every_entry() {
        let entries = GetGridConfigHandler::new(CorrectionStrategy::Center)
            .list()
            .unwrap();
        assert_eq!(entries.len(), catalog().len());
        assert!(entries
            .iter()
            .all(|c| c.distribution.total() == u64::from(c.total_items)));
    }
}
