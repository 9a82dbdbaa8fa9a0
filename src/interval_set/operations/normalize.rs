use crate::interval::Interval;
use crate::tolerance::Tolerance;

/// Sorts `intervals` by minimum and merges every run of intersecting or
/// touching neighbours into a single interval.
///
/// A single left-to-right pass: the running interval absorbs its successor
/// for as long as their union exists, and is emitted as soon as it does not.
pub fn normalize(mut intervals: Vec<Interval>, tolerance: Tolerance) -> Vec<Interval> {
    let input = intervals.len();
    intervals.sort_by(|a, b| a.minimum().total_cmp(&b.minimum()));

    let mut merged: Vec<Interval> = Vec::with_capacity(input);
    let mut iter = intervals.into_iter();
    let Some(mut running) = iter.next() else {
        return merged;
    };
    for next in iter {
        match running.union_with(&next, tolerance) {
            Some(union) => running = union,
            None => {
                merged.push(running);
                running = next;
            }
        }
    }
    merged.push(running);

    tracing::trace!(input, output = merged.len(), %tolerance, "normalized intervals");
    merged
}
