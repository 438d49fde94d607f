//! Property-based tests for the distribution generator, corrector, and validator.

use proptest::prelude::*;

use qsort_grid::domain::foundation::{ErrorCode, ScaleRange};
use qsort_grid::domain::grid::{
    CorrectionStrategy, Distribution, DistributionCorrector, DistributionGenerator,
    DistributionValidator, GeneratorSettings, EDGE_MINIMUM,
};

/// Strategy: a scale of 3 to 13 columns, not necessarily centered on zero.
fn range_strategy() -> impl Strategy<Value = ScaleRange> {
    (-6i32..=0, 2i32..=12).prop_map(|(min, width)| {
        ScaleRange::try_new(min, min + width).expect("min < max by construction")
    })
}

/// Strategy: a range plus a total that admits a symmetric grid.
fn request_strategy() -> impl Strategy<Value = (ScaleRange, u32)> {
    range_strategy().prop_flat_map(|range| {
        let n = range.columns() as u32;
        (Just(range), (2 * n)..=200u32).prop_map(move |(range, total)| {
            let total = if n % 2 == 0 && total % 2 == 1 {
                total + 1
            } else {
                total
            };
            (range, total)
        })
    })
}

proptest! {
    // 1. Generated grids always hold exactly the requested items
    #[test]
    fn generated_sum_matches_total((range, total) in request_strategy()) {
        let dist = DistributionGenerator::default().generate(range, total).unwrap();
        prop_assert_eq!(dist.len(), range.columns());
        prop_assert_eq!(dist.total(), u64::from(total));
    }

    // 2. Generated grids mirror around the center
    #[test]
    fn generated_is_symmetric((range, total) in request_strategy()) {
        let dist = DistributionGenerator::default().generate(range, total).unwrap();
        prop_assert!(dist.is_symmetric(), "dist={:?}", dist.as_slice());
    }

    // 3. Edges sit at the minimum
    #[test]
    fn generated_edges_at_minimum((range, total) in request_strategy()) {
        let dist = DistributionGenerator::default().generate(range, total).unwrap();
        let cells = dist.as_slice();
        prop_assert_eq!(cells[0], EDGE_MINIMUM);
        prop_assert_eq!(cells[cells.len() - 1], EDGE_MINIMUM);
    }

    // 4. With room above the minimum, generated grids pass every check
    #[test]
    fn generated_scores_100((range, total) in request_strategy()) {
        prop_assume!(total > 2 * range.columns() as u32);
        let dist = DistributionGenerator::default().generate(range, total).unwrap();
        let result = DistributionValidator::validate(&dist, total);
        prop_assert!(result.is_valid, "dist={:?} issues={:?}", dist.as_slice(), result.issues);
        prop_assert_eq!(result.score.value(), 100);
    }

    // 5. Unsharpened output still sums, mirrors, and never falls toward the center
    #[test]
    fn unsharpened_keeps_sum_symmetry_and_shape((range, total) in request_strategy()) {
        let generator = DistributionGenerator::new(GeneratorSettings {
            sharpen_peak: false,
            ..GeneratorSettings::default()
        });
        let dist = generator.generate(range, total).unwrap();
        let cells = dist.as_slice();
        let center = cells.len() / 2;
        prop_assert_eq!(dist.total(), u64::from(total));
        prop_assert!(dist.is_symmetric());
        prop_assert!(
            cells[..=center].windows(2).all(|w| w[0] <= w[1]),
            "cells={:?}", cells
        );
        if total > 2 * cells.len() as u32 {
            prop_assert_eq!(DistributionValidator::validate(&dist, total).score.value(), 100);
        }
    }

    // 6. Generation is deterministic
    #[test]
    fn generation_deterministic((range, total) in request_strategy()) {
        let generator = DistributionGenerator::default();
        prop_assert_eq!(generator.generate(range, total).unwrap(), generator.generate(range, total).unwrap());
    }

    // 7. Odd totals never fit an even-width grid
    #[test]
    fn even_width_rejects_odd_total(min in -6i32..=0, half in 1i32..=6, k in 0u32..50) {
        let range = ScaleRange::try_new(min, min + 2 * half - 1).unwrap();
        let n = range.columns() as u32;
        let total = 2 * n + 2 * k + 1;
        let err = DistributionGenerator::default().generate(range, total).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::InvalidTotal);
    }

    // 8. Too few items is always rejected
    #[test]
    fn below_minimum_rejected(range in range_strategy(), shortfall in 1u32..=6) {
        let minimum = 2 * range.columns() as u32;
        let total = minimum.saturating_sub(shortfall);
        let err = DistributionGenerator::default().generate(range, total).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::InvalidTotal);
    }

    // 9. Correction reaches the target and is idempotent
    #[test]
    fn correction_idempotent(
        cells in prop::collection::vec(0u32..20, 1..12),
        extra in 0u32..30,
        center in any::<bool>(),
    ) {
        let strategy = if center { CorrectionStrategy::Center } else { CorrectionStrategy::Symmetric };
        let corrector = DistributionCorrector::new(strategy);
        let dist = Distribution::new(cells);
        let total = dist.total() as u32 + extra;

        let once = corrector.correct_counts(&dist, total).unwrap();
        let twice = corrector.correct_counts(&once, total).unwrap();
        prop_assert_eq!(once.total(), u64::from(total));
        prop_assert_eq!(once, twice);
    }

    // 10. Symmetric correction keeps a mirrored grid mirrored when the gap splits evenly
    #[test]
    fn symmetric_correction_preserves_symmetry(
        half in prop::collection::vec(2u32..10, 1..6),
        odd in any::<bool>(),
        extra in 0u32..20,
    ) {
        let mut cells = half.clone();
        if odd {
            cells.push(10);
        }
        cells.extend(half.iter().rev());
        let n = cells.len();
        let dist = Distribution::new(cells);
        let extra = if n % 2 == 0 { extra * 2 } else { extra };
        let total = dist.total() as u32 + extra;

        let corrected = DistributionCorrector::default().correct_counts(&dist, total).unwrap();
        prop_assert!(corrected.is_symmetric(), "corrected={:?}", corrected.as_slice());
    }

    // 11. Scores never leave 0..=100 and validity means no issues
    #[test]
    fn validator_score_bounded(cells in prop::collection::vec(0u32..30, 0..14), total in 0u32..300) {
        let result = DistributionValidator::validate(&Distribution::new(cells), total);
        prop_assert!(result.score.value() <= 100);
        prop_assert_eq!(result.is_valid, result.issues.is_empty());
    }
}
