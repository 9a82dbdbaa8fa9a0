//! Continuous range of real numbers with inclusive or exclusive endpoints.

use std::fmt::Display;

use super::error::IntervalError;
use crate::compare::ToleranceCmp;
use crate::tolerance::Tolerance;

/// Range between `minimum` and `maximum`, each endpoint independently
/// included or excluded.
///
/// Either bound may be infinite, in which case it is always excluded. Values
/// are immutable; every operation producing a new range returns a new
/// `Interval`.
///
/// `==` compares with [`Tolerance::STANDARD`]; use
/// [`is_equal_to`](Interval::is_equal_to) to pick another tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    minimum: f64,
    is_minimum_included: bool,
    maximum: f64,
    is_maximum_included: bool,
}

impl Interval {
    /// Creates an interval after checking that the bounds describe one.
    ///
    /// # Errors
    ///
    /// Fails when a bound is NaN, when `minimum > maximum`, or when an
    /// infinite bound is marked as included.
    pub fn new(
        minimum: f64,
        is_minimum_included: bool,
        maximum: f64,
        is_maximum_included: bool,
    ) -> Result<Self, IntervalError> {
        if minimum.is_nan() {
            return Err(IntervalError::MinimumNotANumber);
        }
        if maximum.is_nan() {
            return Err(IntervalError::MaximumNotANumber);
        }
        if minimum > maximum {
            return Err(IntervalError::MinimumGreaterThanMaximum);
        }
        if is_minimum_included && minimum.is_infinite() {
            return Err(IntervalError::IncludedInfiniteMinimum);
        }
        if is_maximum_included && maximum.is_infinite() {
            return Err(IntervalError::IncludedInfiniteMaximum);
        }
        Ok(Self {
            minimum,
            is_minimum_included,
            maximum,
            is_maximum_included,
        })
    }

    /// `(minimum, maximum)`
    pub fn open(minimum: f64, maximum: f64) -> Result<Self, IntervalError> {
        Self::new(minimum, false, maximum, false)
    }

    /// `(minimum, maximum]`
    pub fn open_closed(minimum: f64, maximum: f64) -> Result<Self, IntervalError> {
        Self::new(minimum, false, maximum, true)
    }

    /// `[minimum, maximum)`
    pub fn closed_open(minimum: f64, maximum: f64) -> Result<Self, IntervalError> {
        Self::new(minimum, true, maximum, false)
    }

    /// `[minimum, maximum]`
    pub fn closed(minimum: f64, maximum: f64) -> Result<Self, IntervalError> {
        Self::new(minimum, true, maximum, true)
    }

    /// The whole real line, `(-inf, inf)`.
    pub const fn whole() -> Self {
        Self {
            minimum: f64::NEG_INFINITY,
            is_minimum_included: false,
            maximum: f64::INFINITY,
            is_maximum_included: false,
        }
    }

    /// Builds an interval from bounds computed out of already valid intervals.
    ///
    /// Swaps the values if tolerance-level rounding left them out of order and
    /// drops inclusion from infinite bounds.
    pub(crate) fn from_bounds(
        minimum: f64,
        is_minimum_included: bool,
        maximum: f64,
        is_maximum_included: bool,
    ) -> Self {
        debug_assert!(!minimum.is_nan() && !maximum.is_nan());
        let (minimum, maximum) = (minimum.min(maximum), minimum.max(maximum));
        Self {
            minimum,
            is_minimum_included: is_minimum_included && minimum.is_finite(),
            maximum,
            is_maximum_included: is_maximum_included && maximum.is_finite(),
        }
    }

    pub const fn minimum(&self) -> f64 {
        self.minimum
    }

    pub const fn is_minimum_included(&self) -> bool {
        self.is_minimum_included
    }

    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    pub const fn is_maximum_included(&self) -> bool {
        self.is_maximum_included
    }

    /// `maximum - minimum`, or infinity when either bound is infinite.
    pub fn length(&self) -> f64 {
        if self.minimum.is_infinite() || self.maximum.is_infinite() {
            return f64::INFINITY;
        }
        self.maximum - self.minimum
    }

    /// Returns true if `value` lies within the interval.
    ///
    /// An infinite value is contained only by an interval reaching the same
    /// infinity. NaN is never contained.
    pub fn contains(&self, value: f64, tolerance: Tolerance) -> bool {
        if value == f64::NEG_INFINITY && self.minimum == f64::NEG_INFINITY {
            return true;
        }
        if value == f64::INFINITY && self.maximum == f64::INFINITY {
            return true;
        }

        let above_minimum = if self.is_minimum_included {
            value.is_greater_than_or_equal_to(self.minimum, tolerance)
        } else {
            value.is_greater_than(self.minimum, tolerance)
        };
        let below_maximum = if self.is_maximum_included {
            value.is_less_than_or_equal_to(self.maximum, tolerance)
        } else {
            value.is_less_than(self.maximum, tolerance)
        };
        above_minimum && below_maximum
    }

    /// Returns true if both intervals have the same endpoint kinds and their
    /// bounds match within `tolerance`.
    pub fn is_equal_to(&self, other: &Interval, tolerance: Tolerance) -> bool {
        self.is_minimum_included == other.is_minimum_included
            && self.is_maximum_included == other.is_maximum_included
            && same_minimum(self.minimum, other.minimum, tolerance)
            && same_maximum(self.maximum, other.maximum, tolerance)
    }

    /// Equality over optional intervals: two absent intervals are equal.
    pub fn are_equal(one: Option<&Interval>, other: Option<&Interval>, tolerance: Tolerance) -> bool {
        match (one, other) {
            (None, None) => true,
            (Some(one), Some(other)) => one.is_equal_to(other, tolerance),
            _ => false,
        }
    }
}

/// Minimums match within tolerance or are both negative infinity.
pub(super) fn same_minimum(a: f64, b: f64, tolerance: Tolerance) -> bool {
    a.is_equal_to(b, tolerance) || (a == f64::NEG_INFINITY && b == f64::NEG_INFINITY)
}

/// Maximums match within tolerance or are both positive infinity.
pub(super) fn same_maximum(a: f64, b: f64, tolerance: Tolerance) -> bool {
    a.is_equal_to(b, tolerance) || (a == f64::INFINITY && b == f64::INFINITY)
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other, Tolerance::STANDARD)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.is_minimum_included { '[' } else { '(' },
            self.minimum,
            self.maximum,
            if self.is_maximum_included { ']' } else { ')' }
        )
    }
}
