//! Distribution Corrector - Repairs catalog distributions to their declared totals.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{Distribution, StandardGridConfig};

/// Where the remainder between a declared total and the authored sum goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionStrategy {
    /// Whole remainder into column `floor(columns / 2)`.
    Center,
    /// Remainder split across the central pair on even-width grids.
    ///
    /// Identical to `Center` on odd-width grids. An odd remainder on an
    /// even-width grid leaves one unit on column `floor(columns / 2)`.
    #[default]
    Symmetric,
}

/// Brings a distribution's sum to an exact item count.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionCorrector {
    strategy: CorrectionStrategy,
}

impl DistributionCorrector {
    pub fn new(strategy: CorrectionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> CorrectionStrategy {
        self.strategy
    }

    /// Corrects a catalog entry's raw distribution.
    pub fn correct(&self, config: &StandardGridConfig) -> Result<Distribution, DomainError> {
        if config.distribution.len() != config.columns() {
            return Err(DomainError::new(
                ErrorCode::DistributionMismatch,
                format!(
                    "Catalog entry '{}' has {} values for {} columns",
                    config.id,
                    config.distribution.len(),
                    config.columns()
                ),
            )
            .with_detail("id", config.id.clone()));
        }
        self.correct_counts(&config.distribution, config.total_items)
            .map_err(|e| e.with_detail("id", config.id.clone()))
    }

    /// Returns a copy of `config` carrying the corrected distribution.
    pub fn corrected(&self, config: &StandardGridConfig) -> Result<StandardGridConfig, DomainError> {
        let distribution = self.correct(config)?;
        Ok(StandardGridConfig {
            distribution,
            ..config.clone()
        })
    }

    /// Adds `total_items - sum(distribution)` to the central column(s).
    ///
    /// # Errors
    /// - `DistributionMismatch` for an empty distribution
    /// - `DegenerateCorrection` if a column would drop below zero
    pub fn correct_counts(
        &self,
        distribution: &Distribution,
        total_items: u32,
    ) -> Result<Distribution, DomainError> {
        let n = distribution.len();
        if n == 0 {
            return Err(DomainError::new(
                ErrorCode::DistributionMismatch,
                "Cannot correct an empty distribution",
            ));
        }

        let difference = i64::from(total_items) - distribution.total() as i64;
        if difference == 0 {
            return Ok(distribution.clone());
        }

        let mut cells: Vec<i64> = distribution.as_slice().iter().map(|&c| i64::from(c)).collect();
        let center = n / 2;

        match self.strategy {
            CorrectionStrategy::Symmetric if n % 2 == 0 => {
                let half = difference / 2;
                cells[center - 1] += half;
                cells[center] += difference - half;
            }
            _ => cells[center] += difference,
        }

        if let Some(index) = cells.iter().position(|&c| c < 0) {
            return Err(DomainError::new(
                ErrorCode::DegenerateCorrection,
                format!(
                    "Correcting by {} would leave column {} at {}",
                    difference, index, cells[index]
                ),
            )
            .with_detail("difference", difference.to_string())
            .with_detail("column", index.to_string()));
        }

        Ok(Distribution::new(cells.into_iter().map(|c| c as u32).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::{catalog, get_config_by_id};

    #[test]
    fn correct_adds_shortfall_to_center() {
        let corrector = DistributionCorrector::default();
        let fixed = corrector
            .correct(get_config_by_id("beginner-25").unwrap())
            .unwrap();
        assert_eq!(fixed.as_slice(), &[2, 3, 4, 7, 4, 3, 2]);
        assert_eq!(fixed.total(), 25);
    }

    #[test]
    fn correct_leaves_exact_distribution_untouched() {
        let corrector = DistributionCorrector::default();
        let d = Distribution::new(vec![2, 3, 4, 5, 8, 5, 4, 3, 2]);
        assert_eq!(corrector.correct_counts(&d, 36).unwrap(), d);
    }

    #[test]
    fn correct_removes_surplus_from_center() {
        let corrector = DistributionCorrector::default();
        let d = Distribution::new(vec![2, 3, 6, 3, 2]);
        assert_eq!(corrector.correct_counts(&d, 14).unwrap().as_slice(), &[2, 3, 4, 3, 2]);
    }

    #[test]
    fn every_catalog_entry_corrects_to_its_total() {
        let corrector = DistributionCorrector::default();
        for config in catalog() {
            let fixed = corrector.correct(config).unwrap();
            assert_eq!(fixed.total(), u64::from(config.total_items), "{}", config.id);
            assert!(fixed.is_symmetric(), "{}", config.id);
        }
    }

    #[test]
    fn symmetric_strategy_splits_across_central_pair() {
        let corrector = DistributionCorrector::new(CorrectionStrategy::Symmetric);
        let d = Distribution::new(vec![2, 3, 3, 2]);
        assert_eq!(corrector.correct_counts(&d, 14).unwrap().as_slice(), &[2, 5, 5, 2]);
    }

    #[test]
    fn symmetric_strategy_places_odd_unit_right_of_middle() {
        let corrector = DistributionCorrector::new(CorrectionStrategy::Symmetric);
        let d = Distribution::new(vec![2, 3, 3, 2]);
        assert_eq!(corrector.correct_counts(&d, 13).unwrap().as_slice(), &[2, 4, 5, 2]);
    }

    #[test]
    fn center_strategy_breaks_even_width_symmetry() {
        let corrector = DistributionCorrector::new(CorrectionStrategy::Center);
        let d = Distribution::new(vec![2, 3, 3, 2]);
        let fixed = corrector.correct_counts(&d, 14).unwrap();
        assert_eq!(fixed.as_slice(), &[2, 3, 7, 2]);
        assert!(!fixed.is_symmetric());
    }

    #[test]
    fn correct_reports_degenerate_result() {
        let corrector = DistributionCorrector::default();
        let d = Distribution::new(vec![2, 3, 1, 3, 2]);
        let err = corrector.correct_counts(&d, 8).unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateCorrection);
        assert_eq!(err.details.get("column"), Some(&"2".to_string()));
    }

    #[test]
    fn correct_rejects_empty_distribution() {
        let err = DistributionCorrector::default()
            .correct_counts(&Distribution::default(), 10)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DistributionMismatch);
    }

    #[test]
    fn corrected_copies_metadata() {
        let raw = get_config_by_id("expert-49").unwrap();
        let fixed = DistributionCorrector::default().corrected(raw).unwrap();
        assert_eq!(fixed.id, raw.id);
        assert_eq!(fixed.citation, raw.citation);
        assert_eq!(fixed.distribution.total(), 49);
        assert_eq!(fixed.distribution.as_slice()[5], 9);
    }
}
