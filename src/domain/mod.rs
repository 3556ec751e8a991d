// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust types that describe what the generator works with.
//
// Rules for this layer:
//   - NO file I/O or stdout/stderr access
//   - NO clap or tracing-subscriber types
//   - Only structs, enums, traits and the error taxonomy
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The in-memory list of base words
pub mod wordlist;

// One generated word1+word2 string, borrowed from the word list
pub mod candidate;

// Typed failures and their process exit statuses
pub mod error;

// Core abstractions that the data layer implements
pub mod traits;
