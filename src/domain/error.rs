// ============================================================
// Layer 3: Error Taxonomy
// ============================================================
// Every way a run can fail, and the exit status each one maps to.
//
// A consumer closing the output pipe is deliberately absent here:
// that is a normal end of a run (see Outcome::ConsumerClosed).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a wordlist that does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The wordlist path does not resolve to a file.
    #[error("wordlist not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The wordlist exists but could not be read.
    #[error("cannot read wordlist '{}'", path.display())]
    ReadWordlist {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The --output file could not be created.
    #[error("cannot create output file '{}'", path.display())]
    OpenOutput {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a candidate failed for a reason other than a closed pipe.
    #[error("writing candidates failed")]
    Write(#[source] io::Error),
}

impl GenerateError {
    /// Map a wordlist open/read failure onto the right variant.
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::ReadWordlist { path, source }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_exit_two() {
        let err = GenerateError::from_read(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(err, GenerateError::NotFound { .. }));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "wordlist not found: missing.txt");
    }

    #[test]
    fn test_other_read_errors_map_to_exit_one() {
        let err = GenerateError::from_read(
            "locked.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, GenerateError::ReadWordlist { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_write_error_is_failure() {
        let err = GenerateError::Write(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
