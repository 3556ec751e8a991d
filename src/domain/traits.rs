// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer asks for words through WordSource and
// never learns where they came from.
//
// Implementations:
//   - WordlistLoader → reads a line-oriented file from disk
//   - Vec<String>    → an in-memory list, handy in tests
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::GenerateError;
use crate::domain::wordlist::Wordlist;

// ─── WordSource ───────────────────────────────────────────────────────────────
/// Anything that can produce the full word list up front.
pub trait WordSource {
    /// Load every word. Called once, before any candidate is produced.
    fn load(&self) -> Result<Wordlist, GenerateError>;
}

impl WordSource for Vec<String> {
    fn load(&self) -> Result<Wordlist, GenerateError> {
        Ok(Wordlist::new(self.clone()))
    }
}
