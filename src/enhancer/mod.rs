//! Enhancer records and the end-sorted track container.

mod enhancer;
mod errors;
mod track;

pub use enhancer::Enhancer;
pub use errors::{ParseEnhancerError, ParseTrackError};
pub use track::EnhancerTrack;
