//! Lazy enumeration of proper subsets, largest first.

/// Iterator over every non-empty proper subset of the positions `0..len`.
///
/// Subsets are produced grouped by size, starting at `len - 1` and
/// stepping down to 1, and within one size in lexicographic order over
/// index positions. Each item is the strictly ascending list of selected
/// indices, so mapping a subset back onto the source slice preserves the
/// source's element order.
///
/// A sequence of length `n` yields `2^n - 2` subsets in total. For
/// `len <= 1` there is no size in `[1, len - 1]`, so the iterator is
/// immediately exhausted; callers handle those inputs before enumerating.
///
/// Construction is cheap and each instance is independent, so the stream
/// can be restarted simply by building a new `ProperSubsets`.
#[derive(Debug, Clone)]
pub struct ProperSubsets {
    len: usize,
    size: usize,
    indices: Vec<usize>,
    started: bool,
}

impl ProperSubsets {
    /// Creates an enumerator over the proper subsets of a sequence of
    /// `len` elements.
    pub fn new(len: usize) -> Self {
        let size = len.saturating_sub(1);
        Self {
            len,
            size,
            indices: (0..size).collect(),
            started: false,
        }
    }

    /// Advances `indices` to the next combination of the current size.
    /// Returns false once the current size is exhausted.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            // Rightmost index that can still move right.
            if self.indices[i] < self.len - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }

    /// Resets `indices` to the first combination of the next smaller size.
    /// Returns false when size 1 has already been enumerated.
    fn descend(&mut self) -> bool {
        if self.size <= 1 {
            return false;
        }
        self.size -= 1;
        self.indices = (0..self.size).collect();
        true
    }
}

impl Iterator for ProperSubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }
        if self.advance() || self.descend() {
            return Some(self.indices.clone());
        }
        self.size = 0;
        None
    }
}
