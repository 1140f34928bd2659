//! Exhaustive enhancer selection with domination pruning.
//!
//! Given candidate enhancers sorted by ascending end position, this
//! algorithm finds the non-overlapping subset with the highest total
//! binding-site score. It enumerates candidate subsets rather than using
//! dynamic programming; correctness comes first, and a pruning rule keeps
//! the enumeration tractable in favorable inputs:
//!
//! 1. **Fast paths**: empty input and single-enhancer input are answered
//!    directly, and if the whole track is already fully non-overlapping it
//!    is itself the optimum.
//! 2. **Subset stream**: otherwise every non-empty proper subset is
//!    enumerated lazily, grouped by size from largest to smallest (the
//!    optimum is guaranteed to be a proper subset at this point).
//! 3. **Domination pruning**: subsets confirmed non-overlapping are kept
//!    in acceptance order. A candidate whose element set is covered by an
//!    earlier, larger accepted subset is skipped without an overlap test:
//!    with non-negative scores the superset scores at least as high, so
//!    the candidate can never improve on the incumbent. Because accepted
//!    subsets are non-increasing in size, the scan stops early at the
//!    first entry no larger than the candidate.
//!
//! Worst case remains O(2^n * n) (for example, mutually overlapping
//! enhancers with strictly increasing scores defeat the pruning); typical
//! inputs resolve far faster because large non-overlapping subsets found
//! early dominate most of the smaller ones.
//!
//! # Preconditions
//!
//! The input must be end-sorted (use [`EnhancerTrack`](crate::enhancer::EnhancerTrack)
//! to get this for free) and scores must be non-negative. Neither is
//! checked; violations yield an unspecified, non-panicking result.
//!
//! # Module structure
//!
//! - [`subsets`] - lazy proper-subset enumeration, largest first
//! - [`overlap`] - the consecutive-pair overlap predicate
//! - [`engine`] - the search loop and its accumulators

mod engine;
mod overlap;
mod subsets;

#[cfg(test)]
mod tests;

pub use overlap::fully_non_overlapping;
pub use subsets::ProperSubsets;

use crate::enhancer::Enhancer;
use crate::selection::Selection;

use super::SelectionAlgorithm;

/// Exhaustive best-subset selector with superset-domination pruning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSelector;

impl ExhaustiveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionAlgorithm for ExhaustiveSelector {
    fn select(&self, enhancers: &[Enhancer]) -> Selection {
        match enhancers {
            [] => Selection::empty(),
            [single] => Selection::new(vec![*single], single.score()),
            whole if fully_non_overlapping(whole) => {
                Selection::from_enhancers(whole.to_vec())
            }
            whole => engine::search(whole),
        }
    }
}

/// Selects the highest-scoring non-overlapping subset of an end-sorted
/// enhancer slice.
///
/// Convenience entry point for pipelines where track data may be absent
/// altogether: `None` yields the empty selection, everything else defers
/// to [`ExhaustiveSelector`].
pub fn select_enhancers(enhancers: Option<&[Enhancer]>) -> Selection {
    match enhancers {
        Some(enhancers) => ExhaustiveSelector::new().select(enhancers),
        None => Selection::empty(),
    }
}
