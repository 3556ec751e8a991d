// ============================================================
// Layer 4: Pair Combiner
// ============================================================
// Lazily yields every ordered pair (w1, w2) of the word list,
// outer index slowest, inner index fastest:
//
//   words = [ab, cd]
//   (0,0) abab   (0,1) abcd   (1,0) cdab   (1,1) cdcd
//
// With skip_self, any pair whose two strings are equal is skipped.
// Comparison is by value, so duplicate entries in the list also
// skip each other. Nothing else is ever dropped or reordered.
//
// Reference: Rust Book §13.2 (Processing a Series of Items with Iterators)

use std::iter::FusedIterator;

use crate::domain::candidate::Candidate;

/// Row-major iterator over all word pairs.
#[derive(Debug, Clone)]
pub struct Combiner<'a> {
    words:     &'a [String],
    skip_self: bool,
    outer:     usize,
    inner:     usize,
}

impl<'a> Combiner<'a> {
    pub fn new(words: &'a [String], skip_self: bool) -> Self {
        Self { words, skip_self, outer: 0, inner: 0 }
    }

    /// Pairs not yet visited, before the skip_self filter.
    fn remaining_pairs(&self) -> usize {
        let n = self.words.len();
        if self.outer >= n {
            return 0;
        }
        (n - self.outer)
            .saturating_mul(n)
            .saturating_sub(self.inner)
    }
}

impl<'a> Iterator for Combiner<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let words = self.words;
        let n     = words.len();

        while self.outer < n {
            let first  = &words[self.outer];
            let second = &words[self.inner];

            self.inner += 1;
            if self.inner == n {
                self.inner  = 0;
                self.outer += 1;
            }

            let candidate = Candidate::new(first, second);
            if self.skip_self && candidate.is_self_pair() {
                continue;
            }
            return Some(candidate);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_pairs();
        if self.skip_self {
            (0, Some(remaining))
        } else {
            (remaining, Some(remaining))
        }
    }
}

impl FusedIterator for Combiner<'_> {}
