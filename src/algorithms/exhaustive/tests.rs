//! Test suite for the exhaustive selector.

use super::*;

/// Helper to create enhancers more concisely in tests.
fn en(start: u64, end: u64, score: f64) -> Enhancer {
    Enhancer::new(start, end, score)
}

fn select(enhancers: &[Enhancer]) -> Selection {
    ExhaustiveSelector::new().select(enhancers)
}

/// Independent brute force over all 2^n subsets via bitmasks, ignoring
/// the selector's enumeration order and pruning entirely.
fn brute_force_best_score(enhancers: &[Enhancer]) -> f64 {
    let n = enhancers.len();
    let mut best = 0.0f64;
    for mask in 0u32..(1 << n) {
        let subset: Vec<&Enhancer> = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| &enhancers[i])
            .collect();
        if fully_non_overlapping(&subset) {
            let score: f64 = subset.iter().map(|e| e.score()).sum();
            if score > best {
                best = score;
            }
        }
    }
    best
}

mod trivial_inputs {
    use super::*;

    #[test]
    fn absent_input_yields_empty_selection() {
        let selection = select_enhancers(None);
        assert!(selection.is_empty());
        assert_eq!(selection.total_score(), 0.0);
    }

    #[test]
    fn empty_input_yields_empty_selection() {
        let selection = select(&[]);
        assert!(selection.is_empty());
        assert_eq!(selection.total_score(), 0.0);
    }

    #[test]
    fn single_enhancer_is_selected_whole() {
        let selection = select(&[en(1, 3, 5.0)]);
        assert_eq!(selection.enhancers(), &[en(1, 3, 5.0)]);
        assert_eq!(selection.total_score(), 5.0);
    }

    #[test]
    fn already_non_overlapping_input_is_returned_whole() {
        let input = [en(1, 3, 5.0), en(4, 6, 3.0)];
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &input);
        assert_eq!(selection.total_score(), 8.0);
    }

    #[test]
    fn longer_non_overlapping_run_keeps_source_order() {
        let input = [en(0, 2, 1.0), en(3, 5, 2.0), en(7, 9, 4.0), en(10, 12, 0.5)];
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &input);
        assert_eq!(selection.total_score(), 7.5);
    }
}

mod overlapping_inputs {
    use super::*;

    #[test]
    fn high_scoring_enhancer_beats_overlapping_pair() {
        // First two overlap; (1,5) alone outranks (2,6), and combines
        // with (6,8) for the optimum.
        let input = [en(1, 5, 10.0), en(2, 6, 4.0), en(6, 8, 3.0)];
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &[en(1, 5, 10.0), en(6, 8, 3.0)]);
        assert_eq!(selection.total_score(), 13.0);
    }

    #[test]
    fn mutually_overlapping_trio_reduces_to_heaviest_single() {
        let input = [en(1, 10, 1.0), en(2, 11, 2.0), en(3, 12, 3.0)];
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &[en(3, 12, 3.0)]);
        assert_eq!(selection.total_score(), 3.0);
    }

    #[test]
    fn touching_endpoints_force_a_choice() {
        // end == start counts as overlap, so only one of the two fits.
        let input = [en(1, 4, 2.0), en(4, 7, 6.0)];
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &[en(4, 7, 6.0)]);
        assert_eq!(selection.total_score(), 6.0);
    }

    #[test]
    fn pruning_hostile_input_still_finds_the_optimum() {
        // All pairwise overlapping with strictly increasing scores: every
        // accepted subset is a singleton, so domination never fires.
        let input: Vec<Enhancer> = (0..8)
            .map(|i| en(0, 100 + i, (i + 1) as f64))
            .collect();
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &[en(0, 107, 8.0)]);
        assert_eq!(selection.total_score(), 8.0);
    }

    #[test]
    fn selection_preserves_track_order() {
        let input = [en(1, 4, 1.0), en(2, 5, 6.0), en(6, 9, 2.0), en(7, 10, 1.5)];
        let selection = select(&input);
        assert_eq!(selection.enhancers(), &[en(2, 5, 6.0), en(6, 9, 2.0)]);
        for pair in selection.enhancers().windows(2) {
            assert!(pair[0].end() <= pair[1].end());
        }
    }

    #[test]
    fn works_through_the_selection_algorithm_trait() {
        let selector: &dyn SelectionAlgorithm = &ExhaustiveSelector::new();
        let selection = selector.select(&[en(1, 5, 10.0), en(2, 6, 4.0)]);
        assert_eq!(selection.total_score(), 10.0);
    }
}

mod optimality {
    use super::*;
    use crate::enhancer::EnhancerTrack;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn returned_subset_is_always_non_overlapping() {
        let input = [
            en(0, 5, 2.0),
            en(3, 6, 4.0),
            en(5, 8, 1.0),
            en(7, 9, 3.0),
            en(8, 12, 2.5),
        ];
        let selection = select(&input);
        assert!(fully_non_overlapping(selection.enhancers()));
    }

    #[test]
    fn reported_score_equals_sum_of_chosen_scores() {
        let input = [en(0, 5, 2.0), en(3, 6, 4.0), en(7, 9, 3.0)];
        let selection = select(&input);
        let expected: f64 = selection.enhancers().iter().map(|e| e.score()).sum();
        assert_eq!(selection.total_score(), expected);
    }

    #[test]
    fn matches_brute_force_on_random_tracks() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let n = rng.gen_range(2..=8);
            let track: EnhancerTrack = (0..n)
                .map(|_| {
                    let start = rng.gen_range(0..40u64);
                    let len = rng.gen_range(0..15u64);
                    en(start, start + len, f64::from(rng.gen_range(0..100u32)) / 10.0)
                })
                .collect();

            let selection = select(&track);
            assert!(fully_non_overlapping(selection.enhancers()));
            assert_eq!(
                selection.total_score(),
                brute_force_best_score(&track),
                "suboptimal selection for track {}",
                track
            );
        }
    }
}
