// ============================================================
// Layer 3: Wordlist Domain Type
// ============================================================
// The ordered list of base words, loaded once and never mutated.
// Empty lines have already been dropped by the loader; duplicates
// are kept exactly as they appeared in the source file.

/// An immutable, ordered list of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Build a word list from already-filtered words.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Number of words (N).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Total number of ordered pairs, self-pairs included (N²).
    ///
    /// This is the figure reported before streaming starts, even when
    /// self-pairs are going to be skipped.
    pub fn candidate_count(&self) -> u64 {
        let n = self.words.len() as u64;
        n.saturating_mul(n)
    }
}
