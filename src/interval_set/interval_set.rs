//! An immutable, normalized collection of intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval>` that is always sorted by minimum
//! with no two members intersecting or touching under the tolerance used to
//! build it. Every operation returns a new set built through
//! [`normalize`](super::operations::normalize).
//!
//! Read access goes through `Deref<Target = [Interval]>`, so slice methods
//! (`.len()`, `.iter()`, indexing, `.first()`, ...) work directly.

use std::fmt::Display;
use std::ops::Deref;

use super::operations::{compute_complement, compute_intersection, normalize};
use crate::interval::Interval;
use crate::tolerance::Tolerance;

/// A sorted, non-overlapping union of intervals.
///
/// `==` compares members pairwise with [`Tolerance::STANDARD`]; use
/// [`is_equal_to`](IntervalSet::is_equal_to) to pick another tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The set holding the whole real line.
    pub fn whole() -> Self {
        Self(vec![Interval::whole()])
    }

    /// Builds a set from arbitrary intervals, merging those that intersect
    /// or touch within `tolerance`.
    ///
    /// Accepts plain intervals or `Option<Interval>`; absent entries are
    /// skipped.
    ///
    /// ```
    /// use interval_algebra::{Interval, IntervalSet, Tolerance};
    ///
    /// let set = IntervalSet::create(
    ///     [
    ///         Interval::open(1.0, 4.0).unwrap(),
    ///         Interval::open_closed(-5.0, -3.0).unwrap(),
    ///         Interval::open(2.0, 5.0).unwrap(),
    ///         Interval::closed_open(-3.0, -1.0).unwrap(),
    ///     ],
    ///     Tolerance::STANDARD,
    /// );
    /// assert_eq!(set.to_string(), "(-5, -1) ∪ (1, 5)");
    /// ```
    pub fn create<I, T>(intervals: I, tolerance: Tolerance) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Interval>>,
    {
        let intervals = intervals
            .into_iter()
            .filter_map(Into::<Option<Interval>>::into)
            .collect();
        Self(normalize(intervals, tolerance))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Returns the members in ascending order.
    pub fn intervals(&self) -> &[Interval] {
        &self.0
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    /// Returns true if any member contains `value`.
    pub fn contains(&self, value: f64, tolerance: Tolerance) -> bool {
        self.0.iter().any(|interval| interval.contains(value, tolerance))
    }

    /// Returns true if both sets have the same number of members and the
    /// members are pairwise equal within `tolerance`.
    pub fn is_equal_to(&self, other: &IntervalSet, tolerance: Tolerance) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a.is_equal_to(b, tolerance))
    }

    /// Equality over optional sets: two absent sets are equal.
    pub fn are_equal(one: Option<&IntervalSet>, other: Option<&IntervalSet>, tolerance: Tolerance) -> bool {
        match (one, other) {
            (None, None) => true,
            (Some(one), Some(other)) => one.is_equal_to(other, tolerance),
            _ => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Returns a set that also covers `interval`; an absent interval leaves
    /// the set unchanged.
    pub fn extended_by(&self, interval: impl Into<Option<Interval>>, tolerance: Tolerance) -> IntervalSet {
        match interval.into() {
            Some(interval) => self.extended_by_all([interval], tolerance),
            None => self.clone(),
        }
    }

    /// Returns a set that also covers every given interval; absent entries are
    /// skipped and an empty input leaves the set unchanged.
    pub fn extended_by_all<I, T>(&self, intervals: I, tolerance: Tolerance) -> IntervalSet
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Interval>>,
    {
        let mut combined = self.0.clone();
        let before = combined.len();
        combined.extend(intervals.into_iter().filter_map(Into::<Option<Interval>>::into));
        if combined.len() == before {
            return self.clone();
        }
        Self(normalize(combined, tolerance))
    }

    /// Returns the union of `self` and `other`.
    ///
    /// The concatenation is always re-normalized under `tolerance`, even when
    /// `other` is empty.
    pub fn union_with(&self, other: &IntervalSet, tolerance: Tolerance) -> IntervalSet {
        let combined = self.0.iter().chain(&other.0).copied().collect();
        Self(normalize(combined, tolerance))
    }

    /// Returns the points covered by both sets.
    pub fn intersection_with(&self, other: &IntervalSet, tolerance: Tolerance) -> IntervalSet {
        Self(normalize(compute_intersection(&self.0, &other.0, tolerance), tolerance))
    }

    /// Returns every point of the real line not covered by this set.
    ///
    /// The gaps take the opposite endpoint kind from the members they border.
    /// No tolerance is involved: gaps are kept exactly as they fall between
    /// the members, however narrow.
    pub fn complement(&self) -> IntervalSet {
        Self(compute_complement(&self.0))
    }

    /// Removes the points covered by `other` from this set.
    pub fn shortened_by(&self, other: &IntervalSet, tolerance: Tolerance) -> IntervalSet {
        if self.0.is_empty() {
            return IntervalSet::new();
        }
        if other.0.is_empty() {
            return self.clone();
        }
        self.intersection_with(&other.complement(), tolerance)
    }

    /// Union over optional sets; absent sets count as empty.
    pub fn union(one: Option<&IntervalSet>, other: Option<&IntervalSet>, tolerance: Tolerance) -> IntervalSet {
        match (one, other) {
            (Some(one), Some(other)) => one.union_with(other, tolerance),
            (Some(set), None) | (None, Some(set)) => set.clone(),
            (None, None) => IntervalSet::new(),
        }
    }

    /// Intersection over optional sets; empty if either is absent.
    pub fn intersection(
        one: Option<&IntervalSet>,
        other: Option<&IntervalSet>,
        tolerance: Tolerance,
    ) -> IntervalSet {
        match (one, other) {
            (Some(one), Some(other)) => one.intersection_with(other, tolerance),
            _ => IntervalSet::new(),
        }
    }

    /// Shortening over optional sets.
    ///
    /// An absent `to_shorten` gives an empty set; an absent `shorten_by`
    /// leaves `to_shorten` unchanged.
    pub fn shortened(
        to_shorten: Option<&IntervalSet>,
        shorten_by: Option<&IntervalSet>,
        tolerance: Tolerance,
    ) -> IntervalSet {
        match (to_shorten, shorten_by) {
            (Some(to_shorten), Some(shorten_by)) => to_shorten.shortened_by(shorten_by, tolerance),
            (Some(to_shorten), None) => to_shorten.clone(),
            (None, _) => IntervalSet::new(),
        }
    }

    /// Complement of an optional set; an absent set complements to the
    /// whole real line.
    pub fn complement_to(set: Option<&IntervalSet>) -> IntervalSet {
        set.map_or_else(IntervalSet::whole, IntervalSet::complement)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for IntervalSet {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl AsRef<[Interval]> for IntervalSet {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Interval>> for IntervalSet {
    /// Normalizes with [`Tolerance::STANDARD`].
    fn from(intervals: Vec<Interval>) -> Self {
        Self(normalize(intervals, Tolerance::STANDARD))
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        Self(vec![interval])
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::create(iter, Tolerance::STANDARD)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl Default for IntervalSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "∅");
        }
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ∪ ")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntervalSet {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], interval_set)` in tests.
impl PartialEq<IntervalSet> for Vec<Interval> {
    fn eq(&self, other: &IntervalSet) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
