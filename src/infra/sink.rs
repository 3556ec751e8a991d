// ============================================================
// Layer 5: Candidate Sink
// ============================================================
// Writes candidates one per line, "\n"-terminated, through a
// BufWriter. Each candidate is written as its two halves plus a
// newline, so no String is built per candidate.
//
// When the reader of a pipe goes away (e.g. `| head -1`), the next
// write or flush fails with ErrorKind::BrokenPipe. Rust ignores
// SIGPIPE at startup, so this arrives as an io::Error and never
// kills the process.

use std::io::{self, BufWriter, Write};

use crate::domain::candidate::Candidate;

/// Output buffer size. Large enough to keep syscalls rare when feeding
/// a cracking tool through a pipe.
const BUFFER_SIZE: usize = 64 * 1024;

/// True when a write failed because the consumer stopped reading.
pub fn is_consumer_closed(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}

pub struct CandidateSink<W: Write> {
    out:     BufWriter<W>,
    emitted: u64,
}

impl<W: Write> CandidateSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out:     BufWriter::with_capacity(BUFFER_SIZE, out),
            emitted: 0,
        }
    }

    /// Write one candidate followed by a newline.
    pub fn emit(&mut self, candidate: Candidate<'_>) -> io::Result<()> {
        self.out.write_all(candidate.first.as_bytes())?;
        self.out.write_all(candidate.second.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.emitted += 1;
        Ok(())
    }

    /// Flush everything still buffered.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Candidates accepted so far (buffered or already written).
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_newline_terminated() {
        let mut buf = Vec::new();
        {
            let mut sink = CandidateSink::new(&mut buf);
            sink.emit(Candidate::new("ab", "cd")).unwrap();
            sink.emit(Candidate::new("cd", "ab")).unwrap();
            sink.finish().unwrap();
            assert_eq!(sink.emitted(), 2);
        }
        assert_eq!(buf, b"abcd\ncdab\n");
    }

    #[test]
    fn test_nothing_written_for_no_candidates() {
        let mut buf = Vec::new();
        CandidateSink::new(&mut buf).finish().unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_broken_pipe_is_consumer_closed() {
        let closed = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let other  = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(is_consumer_closed(&closed));
        assert!(!is_consumer_closed(&other));
    }
}
