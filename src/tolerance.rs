//! Tolerance used to compare `f64` values.
//!
//! A [`Tolerance`] is validated once on construction, so every operation that
//! accepts one can rely on it being a usable epsilon.

use std::fmt::Display;

use thiserror::Error;

/// Reasons a value cannot be used as a tolerance.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("Tolerance must be a valid number")]
    NotANumber,

    #[error("Tolerance must be non-negative")]
    Negative,
}

/// Non-negative epsilon defining how close two values must be to be equal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// The standard precision used for comparison.
    pub const STANDARD: Tolerance = Tolerance(1e-9);

    /// No slack: strict orderings degrade to `>=` / `<=`.
    pub const ZERO: Tolerance = Tolerance(0.0);

    /// Checks whether `tolerance` can be used as a tolerance.
    pub fn validate(tolerance: f64) -> Result<(), ToleranceError> {
        if tolerance.is_nan() {
            return Err(ToleranceError::NotANumber);
        }
        if tolerance < 0.0 {
            return Err(ToleranceError::Negative);
        }
        Ok(())
    }

    /// Creates a tolerance after validating it.
    ///
    /// ```rust
    /// use interval_algebra::{Tolerance, ToleranceError};
    ///
    /// assert_eq!(Tolerance::new(1e-3).map(Tolerance::value), Ok(1e-3));
    /// assert_eq!(Tolerance::new(-1.0), Err(ToleranceError::Negative));
    /// assert_eq!(Tolerance::new(f64::NAN), Err(ToleranceError::NotANumber));
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ToleranceError> {
        Self::validate(tolerance)?;
        Ok(Self(tolerance))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "±{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_default() {
        assert_eq!(Tolerance::default(), Tolerance::STANDARD);
        assert_eq!(Tolerance::STANDARD.value(), 1e-9);
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(Tolerance::validate(f64::NAN), Err(ToleranceError::NotANumber));
        assert_eq!(Tolerance::new(f64::NAN), Err(ToleranceError::NotANumber));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(Tolerance::validate(-1.0), Err(ToleranceError::Negative));
        assert_eq!(Tolerance::new(-1e-12), Err(ToleranceError::Negative));
        assert_eq!(
            Tolerance::new(f64::NEG_INFINITY),
            Err(ToleranceError::Negative)
        );
    }

    #[test]
    fn accepts_zero_and_positive() {
        assert!(Tolerance::validate(0.0).is_ok());
        assert!(Tolerance::validate(-0.0).is_ok());
        assert!(Tolerance::validate(1e-3).is_ok());
        assert!(Tolerance::validate(f64::INFINITY).is_ok());
    }

    #[test]
    fn try_from_validates() {
        assert_eq!(Tolerance::try_from(1e-12).map(Tolerance::value), Ok(1e-12));
        assert!(Tolerance::try_from(-0.5).is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ToleranceError::NotANumber.to_string(),
            "Tolerance must be a valid number"
        );
        assert_eq!(
            ToleranceError::Negative.to_string(),
            "Tolerance must be non-negative"
        );
    }
}
