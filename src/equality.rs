//! Equality under a fixed tolerance, for values that compare approximately.
//!
//! [`ToleranceEq`] is implemented by [`Interval`] and [`IntervalSet`];
//! [`EqualityComparer`] binds a validated [`Tolerance`] so the comparison can
//! be handed around as a value.

use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::tolerance::{Tolerance, ToleranceError};

/// Types whose values can be compared within a [`Tolerance`].
pub trait ToleranceEq {
    fn eq_within(&self, other: &Self, tolerance: Tolerance) -> bool;
}

impl ToleranceEq for Interval {
    fn eq_within(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.is_equal_to(other, tolerance)
    }
}

impl ToleranceEq for IntervalSet {
    fn eq_within(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.is_equal_to(other, tolerance)
    }
}

/// Compares optional values with the tolerance it was created with.
///
/// ```
/// use interval_algebra::{EqualityComparer, Interval};
///
/// let comparer = EqualityComparer::new(1e-3)?;
/// let narrow = Interval::open(-10.0, 10.0).unwrap();
/// let wide = Interval::open(-10.0005, 10.0005).unwrap();
/// assert!(comparer.equals(Some(&narrow), Some(&wide)));
/// assert!(comparer.equals::<Interval>(None, None));
/// # Ok::<(), interval_algebra::ToleranceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualityComparer {
    tolerance: Tolerance,
}

impl EqualityComparer {
    /// Creates a comparer after validating `tolerance`.
    pub fn new(tolerance: f64) -> Result<Self, ToleranceError> {
        Ok(Self::with_tolerance(Tolerance::new(tolerance)?))
    }

    pub const fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Two absent values are equal; a single absent value never is.
    pub fn equals<T: ToleranceEq>(&self, one: Option<&T>, other: Option<&T>) -> bool {
        match (one, other) {
            (None, None) => true,
            (Some(one), Some(other)) => one.eq_within(other, self.tolerance),
            _ => false,
        }
    }
}

impl Default for EqualityComparer {
    fn default() -> Self {
        Self::with_tolerance(Tolerance::STANDARD)
    }
}
