// ============================================================
// Layer 3: Candidate Domain Type
// ============================================================
// A candidate is two words glued together with no separator.
// It only borrows the two halves from the word list, so producing
// one never allocates; the output sink writes the halves directly.
//
// Reference: Rust Book §10.3 (Lifetimes)

use std::fmt;

/// One generated `first + second` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub first:  &'a str,
    pub second: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }

    /// True when both halves are the same string (a self-pair).
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first)?;
        f.write_str(self.second)
    }
}
