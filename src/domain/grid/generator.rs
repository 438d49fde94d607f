//! Distribution Generator - Symmetric quasi-normal allocations for arbitrary grids.

use std::cmp::Reverse;

use crate::domain::foundation::{DomainError, ErrorCode, ScaleRange};

use super::Distribution;

/// Every extreme column must hold at least this many items.
pub const EDGE_MINIMUM: u32 = 2;

/// Tunables for the Gaussian kernel and the interior clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    /// `sigma = columns / sigma_divisor`.
    pub sigma_divisor: f64,
    /// Interior columns are capped at `floor(total / max_column_divisor)`.
    pub max_column_divisor: u32,
    /// Move units inward until counts rise strictly toward the center.
    pub sharpen_peak: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sigma_divisor: 3.5,
            max_column_divisor: 4,
            sharpen_peak: true,
        }
    }
}

/// Synthesizes bell-shaped distributions for `(range, total)` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionGenerator {
    settings: GeneratorSettings,
}

impl DistributionGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates a symmetric, quasi-normal distribution summing to `total_items`.
    ///
    /// # Algorithm
    /// 1. Seed both edges with `EDGE_MINIMUM`
    /// 2. Weight columns by a Gaussian kernel centered on the middle column
    /// 3. Round each interior share, clamped to `[2, max(2, total / divisor)]`
    /// 4. Push any shortfall into the center, or trim surplus from the largest interior columns
    /// 5. Average mirrored pairs, then absorb the rounding residual symmetrically
    /// 6. Optionally sharpen the peak so counts rise strictly toward the center
    ///
    /// # Errors
    /// - `InvalidTotal` if `total_items` is zero or below `2 * columns`
    /// - `InvalidTotal` if the grid has an even column count and `total_items` is odd,
    ///   since no symmetric allocation exists
    pub fn generate(&self, range: ScaleRange, total_items: u32) -> Result<Distribution, DomainError> {
        let n = range.columns();
        Self::check_total(range, total_items)?;

        let total = i64::from(total_items);
        let floor = i64::from(EDGE_MINIMUM);
        let mut cells = vec![0i64; n];
        cells[0] = floor;
        cells[n - 1] = floor;

        let proportions = self.bell_proportions(n);
        let cap = (total / i64::from(self.settings.max_column_divisor.max(1))).max(floor);
        for i in 1..n - 1 {
            let ideal = (total as f64 * proportions[i]).round() as i64;
            cells[i] = ideal.clamp(floor, cap);
        }

        let sum: i64 = cells.iter().sum();
        if sum < total {
            cells[n / 2] += total - sum;
        } else if sum > total {
            trim_interior(&mut cells, sum - total, floor);
        }

        for i in 0..n / 2 {
            let j = n - 1 - i;
            let averaged = (cells[i] + cells[j] + 1) / 2;
            cells[i] = averaged;
            cells[j] = averaged;
        }

        let residual = total - cells.iter().sum::<i64>();
        absorb_symmetric(&mut cells, residual, floor);

        if self.settings.sharpen_peak {
            sharpen_peak(&mut cells, floor);
        }

        let counts = cells
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                u32::try_from(c).map_err(|_| {
                    DomainError::new(
                        ErrorCode::InternalError,
                        format!("Generated column {} holds an impossible count {}", i, c),
                    )
                    .with_detail("column", i.to_string())
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;
        Ok(Distribution::new(counts))
    }

    fn check_total(range: ScaleRange, total_items: u32) -> Result<(), DomainError> {
        let n = range.columns();
        let minimum = u64::from(EDGE_MINIMUM) * n as u64;

        if total_items == 0 || u64::from(total_items) < minimum {
            return Err(DomainError::new(
                ErrorCode::InvalidTotal,
                format!(
                    "A {}-column grid needs at least {} items, got {}",
                    n, minimum, total_items
                ),
            )
            .with_detail("total_items", total_items.to_string())
            .with_detail("columns", n.to_string()));
        }

        if n % 2 == 0 && total_items % 2 == 1 {
            return Err(DomainError::new(
                ErrorCode::InvalidTotal,
                format!(
                    "An even-width grid ({} columns) cannot hold an odd total ({}) symmetrically",
                    n, total_items
                ),
            )
            .with_detail("total_items", total_items.to_string())
            .with_detail("columns", n.to_string()));
        }

        Ok(())
    }

    /// Gaussian weights over column indices, normalized to sum to 1.
    fn bell_proportions(&self, n: usize) -> Vec<f64> {
        let sigma = n as f64 / self.settings.sigma_divisor;
        let center = (n as f64 - 1.0) / 2.0;
        let bell: Vec<f64> = (0..n)
            .map(|i| {
                let z = (i as f64 - center) / sigma;
                (-0.5 * z * z).exp()
            })
            .collect();
        let sum: f64 = bell.iter().sum();
        bell.into_iter().map(|v| v / sum).collect()
    }
}

/// Removes `excess` units from interior columns, largest first, never below `floor`.
fn trim_interior(cells: &mut [i64], mut excess: i64, floor: i64) {
    let n = cells.len();
    let center = (n as f64 - 1.0) / 2.0;
    while excess > 0 {
        // Largest count wins; ties go to the column farthest from the center,
        // so a plateau shrinks from its outer ends and never dips.
        let pick = (1..n.saturating_sub(1))
            .filter(|&i| cells[i] > floor)
            .max_by(|&a, &b| {
                cells[a].cmp(&cells[b]).then_with(|| {
                    let da = (a as f64 - center).abs();
                    let db = (b as f64 - center).abs();
                    da.total_cmp(&db)
                })
            });
        match pick {
            Some(i) => {
                cells[i] -= 1;
                excess -= 1;
            }
            None => break,
        }
    }
}

/// Adds or removes `residual` units without breaking mirror symmetry.
///
/// Edges are never touched. Expects `cells` to be symmetric and
/// non-decreasing toward the center; both properties survive.
fn absorb_symmetric(cells: &mut [i64], mut residual: i64, floor: i64) {
    let n = cells.len();
    let odd = n % 2 == 1;
    let mid = n / 2;

    while residual != 0 {
        if residual > 0 {
            if odd {
                cells[mid] += residual;
                residual = 0;
            } else {
                let step = residual / 2;
                if step == 0 {
                    break;
                }
                cells[mid - 1] += step;
                cells[mid] += step;
                residual -= 2 * step;
            }
            continue;
        }

        // A strict peak can give up a unit without falling below its neighbors.
        if odd && cells[mid] > floor && cells[mid] > cells[mid - 1] {
            cells[mid] -= 1;
            residual += 1;
            continue;
        }

        // Largest interior mirrored pair; ties go to the outermost pair.
        let pair = (1..mid)
            .filter(|&i| cells[i] > floor)
            .max_by_key(|&i| (cells[i], Reverse(i)));
        match pair {
            Some(i) => {
                cells[i] -= 1;
                cells[n - 1 - i] -= 1;
                residual += 2;
            }
            None if odd && cells[mid] > floor => {
                cells[mid] -= 1;
                residual += 1;
            }
            None => break,
        }
    }
}

/// Shifts units inward in mirrored pairs until counts rise strictly toward
/// the center wherever they sit above `floor`. Sum and symmetry are preserved.
fn sharpen_peak(cells: &mut [i64], floor: i64) {
    let n = cells.len();
    if n < 3 {
        return;
    }
    // Innermost index of the left half; for odd widths this is the center itself.
    let last = (n - 1) / 2;
    let budget = cells.iter().sum::<i64>() as usize * n;

    for _ in 0..budget {
        let violation = (0..last)
            .rev()
            .find(|&i| cells[i] >= cells[i + 1] && cells[i] > floor);
        let Some(i) = violation else {
            break;
        };
        let (outer, inner) = (i, i + 1);
        cells[outer] -= 1;
        cells[n - 1 - outer] -= 1;
        if inner == n - 1 - inner {
            cells[inner] += 2;
        } else {
            cells[inner] += 1;
            cells[n - 1 - inner] += 1;
        }
    }
}
