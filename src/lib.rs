//! enhanset - Enhancer Subset Selection
//!
//! A weighted interval selection library: given candidate enhancers with
//! binding-site scores on a shared sequence axis, pick the
//! non-overlapping subset with the highest total score via
//! exhaustive-but-pruned subset enumeration.
//!
//! # Example
//!
//! ```
//! use enhanset::{Enhancer, EnhancerTrack, ExhaustiveSelector, SelectionAlgorithm};
//!
//! let track = EnhancerTrack::from(vec![
//!     Enhancer::new(2, 6, 4.0),
//!     Enhancer::new(1, 5, 10.0),
//!     Enhancer::new(6, 8, 3.0),
//! ]);
//!
//! let selection = ExhaustiveSelector::new().select(&track);
//! assert_eq!(selection.total_score(), 13.0);
//! ```

pub mod algorithms;
pub mod enhancer;
pub mod selection;

// Re-export the main entry points for ergonomic use
pub use algorithms::{select_enhancers, ExhaustiveSelector, SelectionAlgorithm};
pub use enhancer::{Enhancer, EnhancerTrack};
pub use selection::Selection;
