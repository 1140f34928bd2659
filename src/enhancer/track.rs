//! An end-sorted container of enhancer records.
//!
//! [`EnhancerTrack`] wraps a `Vec<Enhancer>` and guarantees the ordering
//! the selection algorithms require: entries sorted by ascending end
//! position. Sorting happens once, on construction; the selectors
//! themselves never sort.
//!
//! Read access is fully transparent via `Deref<Target = [Enhancer]>`, so
//! anything that consumes `&[Enhancer]` accepts a track directly.

use std::fmt::Display;
use std::ops::{Deref, Index};

use super::enhancer::Enhancer;
use super::errors::ParseTrackError;

/// Enhancer records sorted by ascending end position.
///
/// The container maintains the **end-sorted invariant** on construction and
/// on every mutation. Entries with equal end positions keep their relative
/// input order.
///
/// # Transparent read access
///
/// `EnhancerTrack` implements `Deref<Target = [Enhancer]>`, so all
/// immutable slice methods (`.len()`, `.iter()`, `.first()`, `.windows()`,
/// etc.) are available directly.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancerTrack(Vec<Enhancer>);

impl EnhancerTrack {
    /// Creates an empty track.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty track with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Wraps a `Vec` that is **already end-sorted** without re-sorting.
    ///
    /// In debug builds this asserts the ordering; in release builds the
    /// check is elided. The caller must ensure the input is sorted by
    /// ascending end position, otherwise downstream selection silently
    /// produces incorrect results.
    pub fn from_sorted_unchecked(vec: Vec<Enhancer>) -> Self {
        debug_assert!(
            is_end_sorted(&vec),
            "EnhancerTrack::from_sorted_unchecked called with unsorted input"
        );
        Self(vec)
    }

    /// Parses a multi-line `start end score` text block into a track.
    ///
    /// Blank lines and lines starting with `#` are skipped. Records may
    /// appear in any order; the resulting track is end-sorted.
    pub fn from_text(text: &str) -> Result<Self, ParseTrackError> {
        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let enhancer = line.parse().map_err(|source| ParseTrackError {
                line: idx + 1,
                source,
            })?;
            records.push(enhancer);
        }
        Ok(Self::from(records))
    }

    /// Inserts an enhancer at its end-sorted position.
    ///
    /// O(n) worst-case due to the shift, O(1) amortized when records are
    /// appended in end order. Ties insert after existing equal-end entries.
    pub fn push(&mut self, enhancer: Enhancer) {
        let at = self.0.partition_point(|e| e.end() <= enhancer.end());
        self.0.insert(at, enhancer);
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Retains only the records for which the predicate returns `true`.
    ///
    /// Removal cannot violate the end-sorted invariant, so no re-sort is
    /// needed.
    pub fn retain<F: FnMut(&Enhancer) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    /// Sum of all binding-site scores in the track.
    pub fn total_score(&self) -> f64 {
        self.0.iter().map(|e| e.score()).sum()
    }

    /// Consumes the track and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Enhancer> {
        self.0
    }

    /// Returns a slice of the records.
    pub fn as_slice(&self) -> &[Enhancer] {
        &self.0
    }
}

/// Returns true if the slice is sorted by ascending end position.
fn is_end_sorted(enhancers: &[Enhancer]) -> bool {
    enhancers.windows(2).all(|pair| pair[0].end() <= pair[1].end())
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for EnhancerTrack {
    type Target = [Enhancer];

    fn deref(&self) -> &[Enhancer] {
        &self.0
    }
}

impl AsRef<[Enhancer]> for EnhancerTrack {
    fn as_ref(&self) -> &[Enhancer] {
        &self.0
    }
}

impl Index<usize> for EnhancerTrack {
    type Output = Enhancer;

    fn index(&self, index: usize) -> &Enhancer {
        &self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Enhancer>> for EnhancerTrack {
    /// Creates a track from records in any order, sorting by end position.
    fn from(mut vec: Vec<Enhancer>) -> Self {
        vec.sort_by_key(Enhancer::end);
        Self(vec)
    }
}

impl From<Enhancer> for EnhancerTrack {
    fn from(enhancer: Enhancer) -> Self {
        Self(vec![enhancer])
    }
}

impl FromIterator<Enhancer> for EnhancerTrack {
    fn from_iter<I: IntoIterator<Item = Enhancer>>(iter: I) -> Self {
        let vec: Vec<Enhancer> = iter.into_iter().collect();
        Self::from(vec)
    }
}

impl Extend<Enhancer> for EnhancerTrack {
    fn extend<I: IntoIterator<Item = Enhancer>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.0.sort_by_key(Enhancer::end);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl IntoIterator for EnhancerTrack {
    type Item = Enhancer;
    type IntoIter = std::vec::IntoIter<Enhancer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EnhancerTrack {
    type Item = &'a Enhancer;
    type IntoIter = std::slice::Iter<'a, Enhancer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl Default for EnhancerTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EnhancerTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, enhancer) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", enhancer)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(track, vec![...])` in tests.
impl PartialEq<Vec<Enhancer>> for EnhancerTrack {
    fn eq(&self, other: &Vec<Enhancer>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], track)` in tests.
impl PartialEq<EnhancerTrack> for Vec<Enhancer> {
    fn eq(&self, other: &EnhancerTrack) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for EnhancerTrack {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EnhancerTrack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<Enhancer>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
