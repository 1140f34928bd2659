//! Result of an enhancer selection run.

use std::fmt::Display;

use crate::enhancer::Enhancer;

/// Non-overlapping subset of a track together with its total score.
///
/// The chosen enhancers keep the relative order they had in the source
/// track. The empty selection carries a total score of zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    enhancers: Vec<Enhancer>,
    total_score: f64,
}

impl Selection {
    /// Creates a selection from chosen enhancers and their precomputed
    /// score sum.
    pub fn new(enhancers: Vec<Enhancer>, total_score: f64) -> Self {
        Self {
            enhancers,
            total_score,
        }
    }

    /// Creates a selection from chosen enhancers, summing their scores.
    pub fn from_enhancers(enhancers: Vec<Enhancer>) -> Self {
        let total_score = enhancers.iter().map(|e| e.score()).sum();
        Self {
            enhancers,
            total_score,
        }
    }

    /// The empty selection with score zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Chosen enhancers in source order.
    pub fn enhancers(&self) -> &[Enhancer] {
        &self.enhancers
    }

    /// Sum of the chosen enhancers' binding-site scores.
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn len(&self) -> usize {
        self.enhancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enhancers.is_empty()
    }

    /// Consumes the selection and returns the chosen enhancers.
    pub fn into_enhancers(self) -> Vec<Enhancer> {
        self.enhancers
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, enhancer) in self.enhancers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", enhancer)?;
        }
        write!(f, "}} total {:.3}", self.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_scores_zero() {
        let s = Selection::empty();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.total_score(), 0.0);
    }

    #[test]
    fn from_enhancers_sums_scores() {
        let s = Selection::from_enhancers(vec![
            Enhancer::new(1, 3, 5.0),
            Enhancer::new(4, 6, 3.0),
        ]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.total_score(), 8.0);
    }

    #[test]
    fn display_format() {
        let s = Selection::from_enhancers(vec![Enhancer::new(1, 3, 5.0)]);
        assert_eq!(format!("{}", s), "{[1, 3] 5.000} total 5.000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let s = Selection::from_enhancers(vec![Enhancer::new(1, 3, 5.0)]);
        let json = serde_json::to_string(&s).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
