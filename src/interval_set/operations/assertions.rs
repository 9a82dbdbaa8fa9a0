//! Shape checks for interval slices.

use crate::interval::Interval;
#[cfg(test)]
use crate::tolerance::Tolerance;

/// Returns true if `intervals` are sorted by minimum.
pub fn is_sorted_by_minimum(intervals: &[Interval]) -> bool {
    intervals
        .windows(2)
        .all(|w| w[0].minimum() <= w[1].minimum())
}

/// Returns true if `intervals` are sorted and no two neighbours intersect or
/// touch under `tolerance`.
#[cfg(test)]
pub fn is_canonical(intervals: &[Interval], tolerance: Tolerance) -> bool {
    is_sorted_by_minimum(intervals)
        && intervals.windows(2).all(|w| {
            !w[0].intersects_with(&w[1], tolerance) && !w[0].touches(&w[1], tolerance)
        })
}
