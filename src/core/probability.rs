//! Probability value type
//!
//! A failure probability is a real number in `[0, 1]`. Construction always
//! validates, so every `Probability` in circulation is finite and in range.
//! Equality and ordering compare at a fixed relative precision instead of raw
//! float equality, which keeps category boundaries derived through different
//! arithmetic paths (e.g. `s / 30 / n` and `s / (30 * n)`) comparable.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Sub};

use crate::core::error::AssemblyError;

/// Relative precision used for equality and ordering
pub const RELATIVE_PRECISION: f64 = 1e-12;

/// A validated failure probability in `[0, 1]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Probability zero (impossible failure)
    pub const ZERO: Probability = Probability(0.0);

    /// Probability one (certain failure)
    pub const ONE: Probability = Probability(1.0);

    /// Create a probability, rejecting NaN and values outside `[0, 1]`
    pub fn new(value: f64) -> Result<Self, AssemblyError> {
        if value.is_nan() {
            return Err(AssemblyError::ValueMayNotBeNaN);
        }
        if value < 0.0 {
            return Err(AssemblyError::ValueBelowZero);
        }
        if value > 1.0 {
            return Err(AssemblyError::ValueAboveOne);
        }
        Ok(Probability(value))
    }

    /// Create a probability from a return period, e.g. `1 / 3000`
    pub fn from_return_period(years: f64) -> Result<Self, AssemblyError> {
        Self::new(1.0 / years)
    }

    /// Create a probability, capping values above one at one.
    ///
    /// Returns the capped probability and whether the cap was applied. NaN and
    /// negative values are still rejected.
    pub fn capped_to_one(value: f64) -> Result<(Self, bool), AssemblyError> {
        if value > 1.0 {
            return Ok((Probability::ONE, true));
        }
        Self::new(value).map(|p| (p, false))
    }

    /// The underlying real number
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Complement `1 - p`
    pub fn complement(&self) -> Probability {
        Probability((1.0 - self.0).clamp(0.0, 1.0))
    }

    /// Whether two probabilities are equal at [`RELATIVE_PRECISION`]
    pub fn approximately_equals(&self, other: &Probability) -> bool {
        let (a, b) = (self.0, other.0);
        if a == b {
            return true;
        }
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= scale * RELATIVE_PRECISION
    }
}

impl TryFrom<f64> for Probability {
    type Error = AssemblyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl PartialEq for Probability {
    fn eq(&self, other: &Self) -> bool {
        self.approximately_equals(other)
    }
}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.approximately_equals(other) {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl PartialEq<f64> for Probability {
    fn eq(&self, other: &f64) -> bool {
        match Probability::new(*other) {
            Ok(p) => self.approximately_equals(&p),
            Err(_) => false,
        }
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Return periods print as "1/N", anything else as a plain decimal
        let period = 1.0 / self.0;
        let rounded = period.round();
        if self.0 > 0.0 && self.0 < 1.0 && (period - rounded).abs() <= rounded * 1e-9 {
            write!(f, "1/{rounded:.0}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// Arithmetic yields plain reals: scaling a probability (e.g. by 30) can leave
// [0, 1], and callers decide whether to validate or cap the result.

impl Mul<f64> for Probability {
    type Output = f64;

    fn mul(self, rhs: f64) -> f64 {
        self.0 * rhs
    }
}

impl Mul<Probability> for Probability {
    type Output = Probability;

    fn mul(self, rhs: Probability) -> Probability {
        Probability(self.0 * rhs.0)
    }
}

impl Div<f64> for Probability {
    type Output = f64;

    fn div(self, rhs: f64) -> f64 {
        self.0 / rhs
    }
}

impl Sub<Probability> for Probability {
    type Output = f64;

    fn sub(self, rhs: Probability) -> f64 {
        self.0 - rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_probabilities() {
        assert_eq!(Probability::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Probability::new(1.0).unwrap().value(), 1.0);
        assert_eq!(Probability::new(0.25).unwrap().value(), 0.25);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Probability::new(f64::NAN), Err(AssemblyError::ValueMayNotBeNaN));
        assert_eq!(Probability::new(-0.1), Err(AssemblyError::ValueBelowZero));
        assert_eq!(Probability::new(1.1), Err(AssemblyError::ValueAboveOne));
        assert_eq!(
            Probability::new(f64::INFINITY),
            Err(AssemblyError::ValueAboveOne)
        );
    }

    #[test]
    fn test_from_return_period() {
        let p = Probability::from_return_period(1000.0).unwrap();
        assert_eq!(p, 0.001);
    }

    #[test]
    fn test_capped_to_one() {
        let (p, capped) = Probability::capped_to_one(1.5).unwrap();
        assert_eq!(p, Probability::ONE);
        assert!(capped);

        let (p, capped) = Probability::capped_to_one(0.5).unwrap();
        assert_eq!(p.value(), 0.5);
        assert!(!capped);

        assert!(Probability::capped_to_one(-1.0).is_err());
    }

    #[test]
    fn test_equality_ignores_rounding_noise() {
        let s = Probability::new(1.0 / 3000.0).unwrap();
        let a = Probability::new(s.value() / 30.0 / 2.5).unwrap();
        let b = Probability::new(s.value() / (30.0 * 2.5)).unwrap();
        assert_eq!(a, b);
        assert!(a <= b && a >= b);
    }

    #[test]
    fn test_ordering() {
        let small = Probability::new(1.0 / 30000.0).unwrap();
        let large = Probability::new(1.0 / 300.0).unwrap();
        assert!(small < large);
        assert!(large > small);
        assert_ne!(small, large);
    }

    #[test]
    fn test_arithmetic() {
        let p = Probability::new(0.1).unwrap();
        assert!((p * 30.0 - 3.0).abs() < 1e-12);
        assert!((p / 4.0 - 0.025).abs() < 1e-12);
        assert_eq!(p * Probability::new(0.5).unwrap(), 0.05);
        assert!((Probability::ONE - p - 0.9).abs() < 1e-12);
        assert_eq!(p.complement(), 0.9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Probability::new(1.0 / 3000.0).unwrap().to_string(), "1/3000");
        assert_eq!(Probability::ZERO.to_string(), "0");
        assert_eq!(Probability::ONE.to_string(), "1");
        assert_eq!(Probability::new(0.5).unwrap().to_string(), "1/2");
        assert_eq!(Probability::new(0.6).unwrap().to_string(), "0.6");
        assert_eq!(Probability::new(0.75).unwrap().to_string(), "0.75");
    }

    #[test]
    fn test_deserialize_validates() {
        let p: Probability = serde_yml::from_str("0.001").unwrap();
        assert_eq!(p, 0.001);
        assert!(serde_yml::from_str::<Probability>("1.5").is_err());
    }
}
