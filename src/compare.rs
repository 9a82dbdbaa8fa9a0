//! Tolerance-aware ordering predicates for `f64` and `Option<f64>`.
//!
//! Any NaN operand makes every predicate return `false`, including NaN
//! compared with itself. Infinities compare as expected against finite values,
//! but `inf == inf` is `false` because `inf - inf` is NaN; callers that need
//! same-infinity equality must check for it explicitly.
//!
//! For `Option<f64>` a single absent operand always yields `false`. Two absent
//! operands are equal but never ordered.

use crate::tolerance::Tolerance;

/// Comparison of floating-point values within a [`Tolerance`].
pub trait ToleranceCmp: Copy {
    /// `|self - other| <= tolerance`
    fn is_equal_to(self, other: Self, tolerance: Tolerance) -> bool;

    /// `self - other >= tolerance`
    fn is_greater_than(self, other: Self, tolerance: Tolerance) -> bool;

    /// `self - other >= -tolerance`
    fn is_greater_than_or_equal_to(self, other: Self, tolerance: Tolerance) -> bool;

    /// `other - self >= tolerance`
    fn is_less_than(self, other: Self, tolerance: Tolerance) -> bool;

    /// `other - self >= -tolerance`
    fn is_less_than_or_equal_to(self, other: Self, tolerance: Tolerance) -> bool;

    /// `|self| <= tolerance`
    fn is_zero_within(self, tolerance: Tolerance) -> bool;

    fn is_positive_within(self, tolerance: Tolerance) -> bool;

    fn is_negative_within(self, tolerance: Tolerance) -> bool;

    fn is_non_negative_within(self, tolerance: Tolerance) -> bool;

    fn is_non_positive_within(self, tolerance: Tolerance) -> bool;
}

impl ToleranceCmp for f64 {
    #[inline]
    fn is_equal_to(self, other: f64, tolerance: Tolerance) -> bool {
        (self - other).abs() <= tolerance.value()
    }

    #[inline]
    fn is_greater_than(self, other: f64, tolerance: Tolerance) -> bool {
        self - other >= tolerance.value()
    }

    #[inline]
    fn is_greater_than_or_equal_to(self, other: f64, tolerance: Tolerance) -> bool {
        self - other >= -tolerance.value()
    }

    #[inline]
    fn is_less_than(self, other: f64, tolerance: Tolerance) -> bool {
        other - self >= tolerance.value()
    }

    #[inline]
    fn is_less_than_or_equal_to(self, other: f64, tolerance: Tolerance) -> bool {
        other - self >= -tolerance.value()
    }

    #[inline]
    fn is_zero_within(self, tolerance: Tolerance) -> bool {
        self.is_equal_to(0.0, tolerance)
    }

    #[inline]
    fn is_positive_within(self, tolerance: Tolerance) -> bool {
        self.is_greater_than(0.0, tolerance)
    }

    #[inline]
    fn is_negative_within(self, tolerance: Tolerance) -> bool {
        self.is_less_than(0.0, tolerance)
    }

    #[inline]
    fn is_non_negative_within(self, tolerance: Tolerance) -> bool {
        self.is_greater_than_or_equal_to(0.0, tolerance)
    }

    #[inline]
    fn is_non_positive_within(self, tolerance: Tolerance) -> bool {
        self.is_less_than_or_equal_to(0.0, tolerance)
    }
}

impl ToleranceCmp for Option<f64> {
    fn is_equal_to(self, other: Option<f64>, tolerance: Tolerance) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.is_equal_to(b, tolerance),
            _ => false,
        }
    }

    fn is_greater_than(self, other: Option<f64>, tolerance: Tolerance) -> bool {
        both(self, other, |a, b| a.is_greater_than(b, tolerance))
    }

    fn is_greater_than_or_equal_to(self, other: Option<f64>, tolerance: Tolerance) -> bool {
        both(self, other, |a, b| a.is_greater_than_or_equal_to(b, tolerance))
    }

    fn is_less_than(self, other: Option<f64>, tolerance: Tolerance) -> bool {
        both(self, other, |a, b| a.is_less_than(b, tolerance))
    }

    fn is_less_than_or_equal_to(self, other: Option<f64>, tolerance: Tolerance) -> bool {
        both(self, other, |a, b| a.is_less_than_or_equal_to(b, tolerance))
    }

    fn is_zero_within(self, tolerance: Tolerance) -> bool {
        self.is_some_and(|v| v.is_zero_within(tolerance))
    }

    fn is_positive_within(self, tolerance: Tolerance) -> bool {
        self.is_some_and(|v| v.is_positive_within(tolerance))
    }

    fn is_negative_within(self, tolerance: Tolerance) -> bool {
        self.is_some_and(|v| v.is_negative_within(tolerance))
    }

    fn is_non_negative_within(self, tolerance: Tolerance) -> bool {
        self.is_some_and(|v| v.is_non_negative_within(tolerance))
    }

    fn is_non_positive_within(self, tolerance: Tolerance) -> bool {
        self.is_some_and(|v| v.is_non_positive_within(tolerance))
    }
}

/// Ordering over optional values: absent on either side is incomparable.
fn both(a: Option<f64>, b: Option<f64>, f: impl FnOnce(f64, f64) -> bool) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => f(a, b),
        _ => false,
    }
}
