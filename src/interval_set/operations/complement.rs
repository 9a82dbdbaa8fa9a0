use super::assertions::is_sorted_by_minimum;
use crate::interval::Interval;

/// Returns the gaps around and between canonical `intervals`.
///
/// Each gap takes the opposite endpoint kind from the interval it borders.
/// An empty input yields the whole real line, and a bound already at the
/// matching infinity produces no lead-in or trailing gap.
///
/// No tolerance is involved. A gap whose bounds cross (neighbours that
/// overlap by less than the tolerance the set was built with) or that holds
/// no point is dropped, and gaps sharing a point (around an empty member such
/// as `(a, a)`) are joined.
pub fn compute_complement(intervals: &[Interval]) -> Vec<Interval> {
    debug_assert!(is_sorted_by_minimum(intervals));

    let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
        return vec![Interval::whole()];
    };

    let mut gaps = Vec::with_capacity(intervals.len() + 1);
    if first.minimum() != f64::NEG_INFINITY {
        gaps.push((f64::NEG_INFINITY, false, first.minimum(), !first.is_minimum_included()));
    }
    for pair in intervals.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        gaps.push((
            prev.maximum(),
            !prev.is_maximum_included(),
            next.minimum(),
            !next.is_minimum_included(),
        ));
    }
    if last.maximum() != f64::INFINITY {
        gaps.push((last.maximum(), !last.is_maximum_included(), f64::INFINITY, false));
    }

    let mut result: Vec<Interval> = Vec::with_capacity(gaps.len());
    for (minimum, is_minimum_included, maximum, is_maximum_included) in gaps {
        let holds_points = minimum < maximum
            || (minimum == maximum && is_minimum_included && is_maximum_included);
        if !holds_points {
            continue;
        }
        let gap = Interval::from_bounds(minimum, is_minimum_included, maximum, is_maximum_included);
        if let Some(previous) = result.last_mut() {
            if joins_exactly(previous, &gap) {
                *previous = join(previous, &gap);
                continue;
            }
        }
        result.push(gap);
    }

    tracing::trace!(input = intervals.len(), output = result.len(), "complemented intervals");
    result
}

/// `lower` and `upper` overlap or meet at a point one of them includes.
fn joins_exactly(lower: &Interval, upper: &Interval) -> bool {
    lower.maximum() > upper.minimum()
        || (lower.maximum() == upper.minimum()
            && (lower.is_maximum_included() || upper.is_minimum_included()))
}

fn join(lower: &Interval, upper: &Interval) -> Interval {
    let (maximum, is_maximum_included) = if upper.maximum() > lower.maximum() {
        (upper.maximum(), upper.is_maximum_included())
    } else if upper.maximum() < lower.maximum() {
        (lower.maximum(), lower.is_maximum_included())
    } else {
        (
            lower.maximum(),
            lower.is_maximum_included() || upper.is_maximum_included(),
        )
    };
    Interval::from_bounds(
        lower.minimum(),
        lower.is_minimum_included(),
        maximum,
        is_maximum_included,
    )
}
