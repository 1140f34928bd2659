//! Search loop with superset-domination pruning.

use crate::enhancer::Enhancer;
use crate::selection::Selection;

use super::overlap::fully_non_overlapping;
use super::subsets::ProperSubsets;

/// Mutable accumulators local to one selection run.
///
/// `accepted` holds every subset confirmed non-overlapping so far, in
/// acceptance order. Enumeration is size-descending, so the list is
/// non-increasing by size; the domination scan's early exit relies on
/// this.
#[derive(Debug, Default)]
struct SearchState {
    accepted: Vec<Vec<usize>>,
    best: Vec<usize>,
    best_score: f64,
}

impl SearchState {
    /// Checks whether an already-accepted subset is a proper superset of
    /// `candidate`.
    ///
    /// Scans from the oldest (largest) entry and stops at the first entry
    /// no larger than the candidate: a proper superset must be strictly
    /// larger, and no later entry can be, since `accepted` is
    /// non-increasing by size.
    fn is_dominated(&self, candidate: &[usize]) -> bool {
        for prev in &self.accepted {
            if prev.len() <= candidate.len() {
                break;
            }
            if contains_all(prev, candidate) {
                return true;
            }
        }
        false
    }

    /// Records a confirmed non-overlapping subset and updates the
    /// incumbent if the subset scores strictly higher.
    fn accept(&mut self, subset: Vec<usize>, score: f64) {
        if score > self.best_score {
            self.best_score = score;
            self.best = subset.clone();
        }
        self.accepted.push(subset);
    }
}

/// Returns true if the strictly ascending index list `sup` contains every
/// index of the strictly ascending list `sub`.
fn contains_all(sup: &[usize], sub: &[usize]) -> bool {
    let mut sup_iter = sup.iter();
    'next_needle: for needle in sub {
        for idx in sup_iter.by_ref() {
            match idx.cmp(needle) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'next_needle,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}

/// Runs the exhaustive search over every non-empty proper subset of
/// `enhancers`, largest subsets first.
///
/// Assumes the caller already handled the trivial inputs: the slice has
/// at least two elements and is not itself fully non-overlapping (so the
/// optimum is guaranteed to be a proper subset).
pub(super) fn search(enhancers: &[Enhancer]) -> Selection {
    let mut state = SearchState::default();

    for subset in ProperSubsets::new(enhancers.len()) {
        if state.is_dominated(&subset) {
            // A non-overlapping superset was accepted earlier. With
            // non-negative scores it scores at least as high, and any
            // subset this candidate would dominate is dominated by that
            // superset as well, so the candidate is skipped outright.
            continue;
        }

        let members: Vec<&Enhancer> = subset.iter().map(|&i| &enhancers[i]).collect();
        if !fully_non_overlapping(&members) {
            continue;
        }

        let score: f64 = members.iter().map(|e| e.score()).sum();
        state.accept(subset, score);
    }

    let chosen: Vec<Enhancer> = state.best.iter().map(|&i| enhancers[i]).collect();
    Selection::new(chosen, state.best_score)
}
