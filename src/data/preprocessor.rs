// ============================================================
// Layer 4: Text Preprocessor
// ============================================================
// Turns the raw bytes of a wordlist into lines.
//
// Wordlists scraped from leaks are rarely clean UTF-8 and mix
// Unix and Windows line endings. Two steps, applied in order:
//   1. Decode as UTF-8, silently dropping invalid byte sequences
//   2. Split on "\n", "\r\n" or a lone "\r", removing only the
//      terminator itself (no other trimming)
//
// Reference: Rust Book §8.2 (Storing UTF-8 Encoded Text with Strings)

use std::str;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Decode bytes as UTF-8, skipping any sequence that is not valid.
    pub fn decode(&self, mut bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());

        loop {
            match str::from_utf8(bytes) {
                Ok(valid) => {
                    out.push_str(valid);
                    return out;
                }
                Err(e) => {
                    let (valid, rest) = bytes.split_at(e.valid_up_to());
                    // valid_up_to() bytes always decode
                    out.push_str(str::from_utf8(valid).unwrap_or_default());

                    match e.error_len() {
                        // Bad sequence in the middle: skip it and keep going
                        Some(bad) => bytes = &rest[bad..],
                        // Truncated sequence at the very end: nothing left to keep
                        None => return out,
                    }
                }
            }
        }
    }

    /// Split decoded text into lines, recognising every common line ending.
    ///
    /// A trailing terminator does not produce an extra empty line, but
    /// blank lines in the middle are returned as empty strings.
    pub fn lines<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut lines = Vec::new();
        let bytes     = text.as_bytes();
        let mut start = 0usize;
        let mut i     = 0usize;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    lines.push(&text[start..i]);
                    i += 1;
                    start = i;
                }
                b'\r' => {
                    lines.push(&text[start..i]);
                    i += 1;
                    // Treat "\r\n" as one terminator
                    if bytes.get(i) == Some(&b'\n') {
                        i += 1;
                    }
                    start = i;
                }
                _ => i += 1,
            }
        }

        if start < bytes.len() {
            lines.push(&text[start..]);
        }

        lines
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
