pub mod exhaustive;

pub use exhaustive::{select_enhancers, ExhaustiveSelector};

use crate::enhancer::Enhancer;
use crate::selection::Selection;

/// Algorithm for picking a non-overlapping subset of weighted enhancers.
///
/// Implementations receive candidates sorted by ascending end position
/// with non-negative scores; supplying anything else is a contract
/// violation and yields an unspecified (but non-panicking) result.
pub trait SelectionAlgorithm {
    /// Select a non-overlapping subset of `enhancers` and report it with
    /// its total binding-site score.
    fn select(&self, enhancers: &[Enhancer]) -> Selection;
}
