//! Weighted enhancer interval on a sequence axis.

use std::fmt::Display;
use std::str::FromStr;

use super::errors::ParseEnhancerError;

/// Candidate enhancer occupying positions `[start, end]` with a
/// binding-site score.
///
/// Plain value data: two enhancers with equal fields are interchangeable.
/// The selection algorithms assume `start <= end` and a non-negative score
/// but never verify either; both are caller contracts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enhancer {
    start: u64,
    end: u64,
    score: f64,
}

impl Enhancer {
    /// Creates an enhancer spanning `[start, end]` with the given score.
    pub const fn new(start: u64, end: u64, score: f64) -> Self {
        Self { start, end, score }
    }

    pub const fn start(&self) -> u64 {
        self.start
    }

    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Binding-site score contributed when this enhancer is selected.
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Returns true if `self` lies strictly before `other` on the axis.
    ///
    /// Touching at a single position (`self.end == other.start`) counts as
    /// overlap, so two selectable neighbours need `self.end < other.start`.
    pub const fn precedes(&self, other: &Enhancer) -> bool {
        self.end < other.start
    }
}

impl Display for Enhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] {:.3}", self.start, self.end, self.score)
    }
}

impl FromStr for Enhancer {
    type Err = ParseEnhancerError;

    /// Parses a whitespace-separated `start end score` record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();

        let start = fields
            .next()
            .ok_or(ParseEnhancerError::MissingField("start"))?;
        let end = fields.next().ok_or(ParseEnhancerError::MissingField("end"))?;
        let score = fields
            .next()
            .ok_or(ParseEnhancerError::MissingField("score"))?;

        if let Some(extra) = fields.next() {
            return Err(ParseEnhancerError::TrailingField(extra.to_string()));
        }

        let start: u64 = start
            .parse()
            .map_err(|_| ParseEnhancerError::InvalidPosition(start.to_string()))?;
        let end: u64 = end
            .parse()
            .map_err(|_| ParseEnhancerError::InvalidPosition(end.to_string()))?;
        let score: f64 = score
            .parse()
            .map_err(|_| ParseEnhancerError::InvalidScore(score.to_string()))?;

        Ok(Self::new(start, end, score))
    }
}
