use super::assertions::is_sorted_by_minimum;
use crate::interval::Interval;
use crate::tolerance::Tolerance;

/// Which operand an interval came from during the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    First,
    Second,
}

/// Computes the pairwise intersections of two sorted interval sequences.
///
/// Both inputs are merged into one sweep ordered by minimum. A single
/// accumulator is carried along: a successor from the same operand replaces
/// it, a successor from the other operand is intersected with it, and the
/// accumulator then becomes whichever of the two reaches further right.
///
/// The output is sorted but may contain touching fragments; pass it through
/// [`normalize`](super::normalize) before building a set.
pub fn compute_intersection(a: &[Interval], b: &[Interval], tolerance: Tolerance) -> Vec<Interval> {
    debug_assert!(is_sorted_by_minimum(a));
    debug_assert!(is_sorted_by_minimum(b));

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut sweep: Vec<(Origin, Interval)> = a
        .iter()
        .map(|iv| (Origin::First, *iv))
        .chain(b.iter().map(|iv| (Origin::Second, *iv)))
        .collect();
    sweep.sort_by(|(_, x), (_, y)| x.minimum().total_cmp(&y.minimum()));

    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut iter = sweep.into_iter();
    let Some(mut current) = iter.next() else {
        return result;
    };
    for next in iter {
        if next.0 == current.0 {
            current = next;
            continue;
        }
        if let Some(intersection) = current.1.intersection_with(&next.1, tolerance) {
            result.push(intersection);
        }
        if next.1.maximum() > current.1.maximum() {
            current = next;
        }
    }

    tracing::trace!(
        first = a.len(),
        second = b.len(),
        fragments = result.len(),
        "swept intersection"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const STD: Tolerance = Tolerance::STANDARD;

    fn closed(min: f64, max: f64) -> Interval {
        Interval::closed(min, max).unwrap()
    }

    #[test]
    fn empty_operand_gives_empty_result() {
        assert!(compute_intersection(&[], &[closed(0.0, 1.0)], STD).is_empty());
        assert!(compute_intersection(&[closed(0.0, 1.0)], &[], STD).is_empty());
    }

    #[test]
    fn long_interval_cuts_several_short_ones() {
        let long = [closed(0.0, 100.0)];
        let short = [closed(1.0, 2.0), closed(10.0, 20.0), closed(90.0, 110.0)];
        assert_eq!(
            compute_intersection(&long, &short, STD),
            vec![closed(1.0, 2.0), closed(10.0, 20.0), closed(90.0, 100.0)]
        );
        assert_eq!(
            compute_intersection(&short, &long, STD),
            vec![closed(1.0, 2.0), closed(10.0, 20.0), closed(90.0, 100.0)]
        );
    }

    #[test]
    fn disjoint_operands_give_nothing() {
        let a = [closed(0.0, 1.0), closed(4.0, 5.0)];
        let b = [closed(2.0, 3.0), closed(6.0, 7.0)];
        assert!(compute_intersection(&a, &b, STD).is_empty());
    }

    #[test]
    fn interleaved_operands() {
        let a = [closed(0.0, 3.0), closed(5.0, 8.0)];
        let b = [closed(2.0, 6.0), closed(7.0, 9.0)];
        assert_eq!(
            compute_intersection(&a, &b, STD),
            vec![closed(2.0, 3.0), closed(5.0, 6.0), closed(7.0, 8.0)]
        );
    }
}
