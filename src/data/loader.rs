// ============================================================
// Layer 4: Wordlist Loader
// ============================================================
// Reads a wordlist file into memory in one go.
//
// The whole file is loaded before generation starts because the
// combiner walks the list N times. Wordlists too large for memory
// are not supported.
//
// Line rules:
//   - Only the line terminator is removed
//   - Lines that are empty after that are discarded
//   - Duplicates stay, in file order
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{fs, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::error::GenerateError;
use crate::domain::traits::WordSource;
use crate::domain::wordlist::Wordlist;

/// Loads a line-oriented wordlist file.
/// Implements the WordSource trait from Layer 3.
pub struct WordlistLoader {
    path: PathBuf,
}

impl WordlistLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for WordlistLoader {
    fn load(&self) -> Result<Wordlist, GenerateError> {
        let bytes = fs::read(&self.path)
            .map_err(|e| GenerateError::from_read(&self.path, e))?;

        tracing::debug!("Read {} bytes from '{}'", bytes.len(), self.path.display());

        let wordlist = parse_words(&bytes);

        tracing::info!(
            "Loaded {} words from '{}'",
            wordlist.len(),
            self.path.display()
        );
        Ok(wordlist)
    }
}

/// Decode raw wordlist bytes and keep every non-empty line.
pub fn parse_words(bytes: &[u8]) -> Wordlist {
    let prep = Preprocessor::new();
    let text = prep.decode(bytes);

    let words: Vec<String> = prep
        .lines(&text)
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    Wordlist::new(words)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_wordlist(contents: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_loads_words_in_order() {
        let f    = temp_wordlist(b"ab\ncd\n");
        let list = WordlistLoader::new(f.path()).load().unwrap();
        assert_eq!(list.words(), &["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn test_blank_lines_discarded_duplicates_kept() {
        let list = parse_words(b"one\n\n\ntwo\none\n\n");
        assert_eq!(list.words(), &["one", "two", "one"].map(String::from));
    }

    #[test]
    fn test_whitespace_only_line_is_a_word() {
        let list = parse_words(b"a\n \nb");
        assert_eq!(list.len(), 3);
        assert_eq!(list.words()[1], " ");
    }

    #[test]
    fn test_windows_line_endings_stripped() {
        let list = parse_words(b"alpha\r\nbeta\r\n");
        assert_eq!(list.words(), &["alpha", "beta"].map(String::from));
    }

    #[test]
    fn test_invalid_utf8_is_ignored() {
        let list = parse_words(b"pa\xFFss\n\xFE\n");
        // The second line is empty once the bad byte is dropped
        assert_eq!(list.words(), &["pass".to_string()]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err  = WordlistLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, GenerateError::NotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordlistLoader::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, GenerateError::ReadWordlist { .. }));
    }

    #[test]
    fn test_empty_file_gives_empty_list() {
        let f = temp_wordlist(b"");
        assert!(WordlistLoader::new(f.path()).load().unwrap().is_empty());
    }
}
