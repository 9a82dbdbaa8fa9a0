//! Pairwise interval algebra.
//!
//! Each operation whose result might not be a single interval returns
//! `Option<Interval>`; `None` is an ordinary outcome (disjoint operands, a
//! split, or an empty remainder), not an error.

use super::interval::{same_maximum, same_minimum, Interval};
use crate::compare::ToleranceCmp;
use crate::tolerance::Tolerance;

/// Endpoint value together with its inclusion flag.
type Bound = (f64, bool);

impl Interval {
    /// Returns true if the intervals share at least one point.
    ///
    /// Bounds strictly inside the other interval are checked first; the
    /// endpoint kinds only matter when the intervals meet at a shared bound.
    pub fn intersects_with(&self, other: &Interval, tolerance: Tolerance) -> bool {
        let is_within = |value: f64, interval: &Interval| {
            value.is_greater_than(interval.minimum(), tolerance)
                && value.is_less_than(interval.maximum(), tolerance)
        };

        if is_within(self.minimum(), other) || is_within(self.maximum(), other) {
            return true;
        }
        if is_within(other.minimum(), self) || is_within(other.maximum(), self) {
            return true;
        }

        if same_minimum(self.minimum(), other.minimum(), tolerance)
            && same_maximum(self.maximum(), other.maximum(), tolerance)
        {
            return true;
        }

        (self.is_maximum_included()
            && other.is_minimum_included()
            && self.maximum().is_equal_to(other.minimum(), tolerance))
            || (other.is_maximum_included()
                && self.is_minimum_included()
                && other.maximum().is_equal_to(self.minimum(), tolerance))
    }

    /// Returns true if one interval ends where the other starts and at least
    /// one of them includes that point.
    pub fn touches(&self, other: &Interval, tolerance: Tolerance) -> bool {
        let meets = |lower: &Interval, upper: &Interval| {
            lower.maximum().is_equal_to(upper.minimum(), tolerance)
                && (lower.is_maximum_included() || upper.is_minimum_included())
        };
        meets(self, other) || meets(other, self)
    }

    /// Returns the points shared by both intervals, or `None` if there are none.
    pub fn intersection_with(&self, other: &Interval, tolerance: Tolerance) -> Option<Interval> {
        if !self.intersects_with(other, tolerance) {
            return None;
        }

        let lower = if same_minimum(self.minimum(), other.minimum(), tolerance) {
            (
                self.minimum().max(other.minimum()),
                self.is_minimum_included() && other.is_minimum_included(),
            )
        } else {
            higher_minimum(self, other)
        };
        let upper = if same_maximum(self.maximum(), other.maximum(), tolerance) {
            (
                self.maximum().min(other.maximum()),
                self.is_maximum_included() && other.is_maximum_included(),
            )
        } else {
            lower_maximum(self, other)
        };

        Some(Interval::from_bounds(lower.0, lower.1, upper.0, upper.1))
    }

    /// Returns the single interval covering both, or `None` if they are
    /// separated by a gap.
    pub fn union_with(&self, other: &Interval, tolerance: Tolerance) -> Option<Interval> {
        if !self.intersects_with(other, tolerance) && !self.touches(other, tolerance) {
            return None;
        }

        let lower = if same_minimum(self.minimum(), other.minimum(), tolerance) {
            (
                self.minimum().min(other.minimum()),
                self.is_minimum_included() || other.is_minimum_included(),
            )
        } else if self.minimum() < other.minimum() {
            (self.minimum(), self.is_minimum_included())
        } else {
            (other.minimum(), other.is_minimum_included())
        };
        let upper = if same_maximum(self.maximum(), other.maximum(), tolerance) {
            (
                self.maximum().max(other.maximum()),
                self.is_maximum_included() || other.is_maximum_included(),
            )
        } else if self.maximum() > other.maximum() {
            (self.maximum(), self.is_maximum_included())
        } else {
            (other.maximum(), other.is_maximum_included())
        };

        Some(Interval::from_bounds(lower.0, lower.1, upper.0, upper.1))
    }

    /// Removes `other` from this interval.
    ///
    /// Returns `self` unchanged when the intervals do not intersect. Returns
    /// `None` when nothing is left or when `other` would split this interval
    /// in two. The cut point switches its kind: a point included by `other` is
    /// excluded from the result and vice versa.
    pub fn shortened_by(&self, other: &Interval, tolerance: Tolerance) -> Option<Interval> {
        if !self.intersects_with(other, tolerance) {
            return Some(*self);
        }

        let keeps_below = other.minimum().is_finite()
            && (self.minimum().is_less_than(other.minimum(), tolerance)
                || (self.minimum().is_equal_to(other.minimum(), tolerance)
                    && self.is_minimum_included()
                    && !other.is_minimum_included()));
        let keeps_above = other.maximum().is_finite()
            && (self.maximum().is_greater_than(other.maximum(), tolerance)
                || (self.maximum().is_equal_to(other.maximum(), tolerance)
                    && self.is_maximum_included()
                    && !other.is_maximum_included()));

        match (keeps_below, keeps_above) {
            (true, false) => Some(Interval::from_bounds(
                self.minimum(),
                self.is_minimum_included(),
                self.maximum().min(other.minimum()),
                !other.is_minimum_included(),
            )),
            (false, true) => Some(Interval::from_bounds(
                self.minimum().max(other.maximum()),
                !other.is_maximum_included(),
                self.maximum(),
                self.is_maximum_included(),
            )),
            _ => None,
        }
    }

    /// Intersection test over optional intervals; absent never intersects.
    pub fn intersect(one: Option<&Interval>, other: Option<&Interval>, tolerance: Tolerance) -> bool {
        match (one, other) {
            (Some(one), Some(other)) => one.intersects_with(other, tolerance),
            _ => false,
        }
    }

    /// Intersection over optional intervals; `None` if either is absent.
    pub fn intersection(
        one: Option<&Interval>,
        other: Option<&Interval>,
        tolerance: Tolerance,
    ) -> Option<Interval> {
        one?.intersection_with(other?, tolerance)
    }

    /// Union over optional intervals; `None` if either is absent.
    pub fn union(
        one: Option<&Interval>,
        other: Option<&Interval>,
        tolerance: Tolerance,
    ) -> Option<Interval> {
        one?.union_with(other?, tolerance)
    }

    /// Shortening over optional intervals.
    ///
    /// An absent `to_shorten` stays absent; an absent `shorten_by` leaves
    /// `to_shorten` unchanged.
    pub fn shortened(
        to_shorten: Option<&Interval>,
        shorten_by: Option<&Interval>,
        tolerance: Tolerance,
    ) -> Option<Interval> {
        let to_shorten = to_shorten?;
        match shorten_by {
            Some(shorten_by) => to_shorten.shortened_by(shorten_by, tolerance),
            None => Some(*to_shorten),
        }
    }
}

fn higher_minimum(a: &Interval, b: &Interval) -> Bound {
    if a.minimum() > b.minimum() {
        (a.minimum(), a.is_minimum_included())
    } else {
        (b.minimum(), b.is_minimum_included())
    }
}

fn lower_maximum(a: &Interval, b: &Interval) -> Bound {
    if a.maximum() < b.maximum() {
        (a.maximum(), a.is_maximum_included())
    } else {
        (b.maximum(), b.is_maximum_included())
    }
}
