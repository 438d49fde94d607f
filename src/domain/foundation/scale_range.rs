//! Bipolar scale range value object (e.g. -4 to +4).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, ErrorCode};

/// Widest scale accepted, in columns.
pub const MAX_COLUMNS: usize = 101;

/// An inclusive integer interval `[min, max]` with `min < max`.
///
/// A Q-sort scale is bipolar by convention (`min < 0 < max`), but any
/// ascending interval yields a well-defined column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct ScaleRange {
    min: i32,
    max: i32,
}

#[derive(Deserialize)]
struct RawRange {
    min: i32,
    max: i32,
}

impl TryFrom<RawRange> for ScaleRange {
    type Error = DomainError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        ScaleRange::try_new(raw.min, raw.max)
    }
}

impl ScaleRange {
    /// Creates a range, rejecting empty, inverted, or wider than `MAX_COLUMNS`
    /// intervals with `InvalidRange`.
    pub fn try_new(min: i32, max: i32) -> Result<Self, DomainError> {
        if min >= max {
            return Err(DomainError::new(
                ErrorCode::InvalidRange,
                format!("Range min ({}) must be below max ({})", min, max),
            )
            .with_detail("min", min.to_string())
            .with_detail("max", max.to_string()));
        }

        let columns = i64::from(max) - i64::from(min) + 1;
        if columns > MAX_COLUMNS as i64 {
            return Err(DomainError::new(
                ErrorCode::InvalidRange,
                format!(
                    "Range {} to {} spans {} columns; at most {} are supported",
                    min, max, columns, MAX_COLUMNS
                ),
            )
            .with_detail("min", min.to_string())
            .with_detail("max", max.to_string())
            .with_detail("columns", columns.to_string()));
        }

        Ok(Self { min, max })
    }

    /// Const constructor for literal tables; panics at compile time on a bad literal.
    pub(crate) const fn from_literal(min: i32, max: i32) -> Self {
        assert!(min < max, "scale range literal must be ascending");
        Self { min, max }
    }

    /// Creates a symmetric range `[-half_width, +half_width]`.
    pub fn symmetric(half_width: u8) -> Result<Self, DomainError> {
        Self::try_new(-i32::from(half_width), i32::from(half_width))
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of scale positions, `max - min + 1`.
    pub fn columns(&self) -> usize {
        (i64::from(self.max) - i64::from(self.min) + 1) as usize
    }

    /// Column index holding the center of the scale, `floor(columns / 2)`.
    pub fn center_index(&self) -> usize {
        self.columns() / 2
    }

    /// Scale values left to right.
    pub fn values(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }

    /// Returns true if `value` is a position on this scale.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for ScaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.max > 0 { "+" } else { "" };
        write!(f, "{} to {}{}", self.min, sign, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_try_new_accepts_ascending_interval() {
        let range = ScaleRange::try_new(-4, 4).unwrap();
        assert_eq!(range.min(), -4);
        assert_eq!(range.max(), 4);
        assert_eq!(range.columns(), 9);
        assert_eq!(range.center_index(), 4);
    }

    #[test]
    fn range_try_new_rejects_empty_and_inverted() {
        assert_eq!(ScaleRange::try_new(3, 3).unwrap_err().code, ErrorCode::InvalidRange);
        let err = ScaleRange::try_new(4, -4).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert_eq!(err.details.get("min"), Some(&"4".to_string()));
    }

    #[test]
    fn range_try_new_rejects_overly_wide_scales() {
        assert!(ScaleRange::try_new(-50, 50).is_ok());
        let err = ScaleRange::try_new(-50, 51).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert_eq!(err.details.get("columns"), Some(&"102".to_string()));

        let err = ScaleRange::try_new(-1_000_000_000, 1_000_000_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert!(ScaleRange::symmetric(51).is_err());
    }

    #[test]
    fn range_symmetric_builds_balanced_scale() {
        let range = ScaleRange::symmetric(5).unwrap();
        assert_eq!(range.columns(), 11);
        assert_eq!(range.min(), -range.max());
        assert!(ScaleRange::symmetric(0).is_err());
    }

    #[test]
    fn range_even_width_center_is_right_of_middle() {
        let range = ScaleRange::try_new(-3, 4).unwrap();
        assert_eq!(range.columns(), 8);
        assert_eq!(range.center_index(), 4);
    }

    #[test]
    fn range_values_and_contains() {
        let range = ScaleRange::try_new(-2, 2).unwrap();
        assert_eq!(range.values().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
        assert!(range.contains(0));
        assert!(!range.contains(3));
    }

    #[test]
    fn range_displays_with_sign() {
        assert_eq!(ScaleRange::symmetric(4).unwrap().to_string(), "-4 to +4");
    }

    #[test]
    fn range_deserialization_enforces_invariant() {
        let ok: ScaleRange = serde_json::from_str(r#"{"min":-3,"max":3}"#).unwrap();
        assert_eq!(ok.columns(), 7);
        assert!(serde_json::from_str::<ScaleRange>(r#"{"min":3,"max":-3}"#).is_err());
    }
}
