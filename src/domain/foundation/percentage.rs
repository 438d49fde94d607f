//! Percentage value object (0-100 scale), used for quality scores and confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
///
/// Deserialization rejects values above 100 instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Subtracts a penalty, flooring at zero.
    pub fn minus(self, points: u8) -> Self {
        Self(self.0.saturating_sub(points))
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(92).value(), 92);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(130) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 130);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn percentage_minus_subtracts_penalty() {
        assert_eq!(Percentage::HUNDRED.minus(30).value(), 70);
        assert_eq!(Percentage::new(92).minus(5).value(), 87);
    }

    #[test]
    fn percentage_minus_floors_at_zero() {
        assert_eq!(Percentage::new(20).minus(25), Percentage::ZERO);
        assert_eq!(Percentage::ZERO.minus(10), Percentage::ZERO);
    }

    #[test]
    fn percentage_deserialize_rejects_over_100() {
        assert!(serde_json::from_str::<Percentage>("130").is_err());
        assert!(serde_json::from_str::<Percentage>("100").is_ok());
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }

    #[test]
    fn percentage_serializes_transparently() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: Percentage = serde_json::from_str("95").unwrap();
        assert_eq!(back.value(), 95);
    }
}
