// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between the wordlist file on disk and the stream of
// candidates handed to the output sink.
//
// The pipeline flows in this order:
//
//   wordlist.txt (raw bytes)
//       │
//       ▼
//   Preprocessor    → drops invalid UTF-8, splits on any line ending
//       │
//       ▼
//   WordlistLoader  → discards blank lines, builds the Wordlist
//       │
//       ▼
//   Combiner        → lazily yields every word1+word2 in row-major order
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads a wordlist file from disk
pub mod loader;

/// Decodes raw bytes and splits them into lines
pub mod preprocessor;

/// Lazy row-major pair iterator
pub mod combiner;
