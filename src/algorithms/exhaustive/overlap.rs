//! Overlap predicate for end-sorted enhancer runs.

use std::borrow::Borrow;

use crate::enhancer::Enhancer;

/// Returns true iff no two enhancers in the sequence overlap.
///
/// Requires the sequence to be sorted by ascending end position. Under
/// that precondition, checking only consecutive pairs (`prev.end <
/// curr.start`, strict) certifies full pairwise non-overlap: the ordering
/// of any non-adjacent pair follows transitively from the ascending ends
/// and the adjacency checks. Sequences of length <= 1 are vacuously
/// non-overlapping.
///
/// The precondition is never verified; an unsorted sequence yields an
/// unspecified answer.
///
/// Accepts both `&[Enhancer]` and `&[&Enhancer]` via [`Borrow`].
pub fn fully_non_overlapping<E: Borrow<Enhancer>>(enhancers: &[E]) -> bool {
    enhancers
        .windows(2)
        .all(|pair| pair[0].borrow().precedes(pair[1].borrow()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(start: u64, end: u64) -> Enhancer {
        Enhancer::new(start, end, 1.0)
    }

    #[test]
    fn short_sequences_are_vacuously_non_overlapping() {
        assert!(fully_non_overlapping::<Enhancer>(&[]));
        assert!(fully_non_overlapping(&[en(1, 3)]));
    }

    #[test]
    fn disjoint_run_passes() {
        assert!(fully_non_overlapping(&[en(1, 3), en(4, 6), en(8, 10)]));
    }

    #[test]
    fn touching_endpoints_count_as_overlap() {
        assert!(!fully_non_overlapping(&[en(1, 3), en(3, 6)]));
    }

    #[test]
    fn contained_and_crossing_pairs_fail() {
        assert!(!fully_non_overlapping(&[en(1, 5), en(2, 6)]));
        assert!(!fully_non_overlapping(&[en(1, 3), en(4, 6), en(5, 9)]));
    }

    #[test]
    fn accepts_reference_slices() {
        let a = en(1, 3);
        let b = en(4, 6);
        assert!(fully_non_overlapping(&[&a, &b]));
    }
}
