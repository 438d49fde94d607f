//! Distribution Validator - Structural scoring of any distribution.
//!
//! Runs on user-in-progress states, so problems are reported as data
//! rather than errors.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::{Distribution, EDGE_MINIMUM};

pub const SUM_MISMATCH_PENALTY: u8 = 30;
pub const ASYMMETRY_PENALTY: u8 = 20;
pub const FLAT_CENTER_PENALTY: u8 = 25;
pub const NON_MONOTONIC_PENALTY: u8 = 15;
pub const EDGE_MINIMUM_PENALTY: u8 = 10;

/// Outcome of validating a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub score: Percentage,
}

impl ValidationResult {
    fn from_issues(issues: Vec<String>, score: Percentage) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
            score,
        }
    }
}

/// Scores distributions against the grid's structural rules.
pub struct DistributionValidator;

impl DistributionValidator {
    /// Validates `distribution` as a grid for `total_items` items.
    ///
    /// Starts at 100 and subtracts a fixed penalty per failed check:
    ///
    /// | Check | Penalty |
    /// |---|---|
    /// | sum equals `total_items` | 30 |
    /// | mirrored pairs are equal | 20 |
    /// | center strictly above the left edge | 25 |
    /// | non-decreasing from the left edge to the center | 15 |
    /// | both edges hold at least `EDGE_MINIMUM` | 10 |
    ///
    /// # Edge Cases
    /// - Empty distribution: one issue, score 0
    pub fn validate(distribution: &Distribution, total_items: u32) -> ValidationResult {
        let cells = distribution.as_slice();
        if cells.is_empty() {
            return ValidationResult::from_issues(
                vec!["Distribution has no columns".to_string()],
                Percentage::ZERO,
            );
        }

        let mut issues = Vec::new();
        let mut score = Percentage::HUNDRED;
        let n = cells.len();
        let center = n / 2;

        let sum = distribution.total();
        if sum != u64::from(total_items) {
            issues.push(format!(
                "Distribution sums to {} but the grid needs {} items",
                sum, total_items
            ));
            score = score.minus(SUM_MISMATCH_PENALTY);
        }

        if let Some(i) = (0..n / 2).find(|&i| cells[i] != cells[n - 1 - i]) {
            issues.push(format!(
                "Distribution is not symmetric: column {} holds {} but column {} holds {}",
                i,
                cells[i],
                n - 1 - i,
                cells[n - 1 - i]
            ));
            score = score.minus(ASYMMETRY_PENALTY);
        }

        if cells[center] <= cells[0] {
            issues.push(format!(
                "Center column ({}) should hold more items than the edge ({})",
                cells[center], cells[0]
            ));
            score = score.minus(FLAT_CENTER_PENALTY);
        }

        if let Some(i) = (0..center).find(|&i| cells[i + 1] < cells[i]) {
            issues.push(format!(
                "Counts should not decrease toward the center: column {} holds {} after {}",
                i + 1,
                cells[i + 1],
                cells[i]
            ));
            score = score.minus(NON_MONOTONIC_PENALTY);
        }

        if cells[0] < EDGE_MINIMUM || cells[n - 1] < EDGE_MINIMUM {
            issues.push(format!(
                "Edge columns need at least {} items each, got {} and {}",
                EDGE_MINIMUM,
                cells[0],
                cells[n - 1]
            ));
            score = score.minus(EDGE_MINIMUM_PENALTY);
        }

        ValidationResult::from_issues(issues, score)
    }
}
