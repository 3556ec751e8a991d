// ============================================================
// Layer 2: GenerateUseCase
// ============================================================
// Runs one generation pass:
//
//   Step 1: Load the word list          (Layer 4 - data)
//   Step 2: Open the output target      (stdout or --output file)
//   Step 3: Report counts to stderr     (diagnostic channel)
//   Step 4: Stream every candidate      (Layer 4 → Layer 5)
//   Step 5: Flush
//
// A failure in Step 1 or 2 happens before anything is written to
// the output. A closed consumer at Step 4 or 5 ends the run early
// with Outcome::ConsumerClosed, which is a success.

use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};

use crate::data::{combiner::Combiner, loader::WordlistLoader};
use crate::domain::error::GenerateError;
use crate::domain::traits::WordSource;
use crate::domain::wordlist::Wordlist;
use crate::infra::sink::{is_consumer_closed, CandidateSink};

// ─── Generation Configuration ────────────────────────────────────────────────
// Everything a run needs. Built from the CLI arguments in Layer 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Path to the wordlist file
    pub wordlist:  PathBuf,
    /// Skip candidates where word1 == word2
    pub skip_self: bool,
    /// Write candidates here instead of stdout
    pub output:    Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            wordlist:  PathBuf::from("wordlist.txt"),
            skip_self: false,
            output:    None,
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every candidate was written and flushed.
    Completed { emitted: u64 },
    /// The consumer stopped reading; generation stopped early.
    ConsumerClosed { emitted: u64 },
}

impl Outcome {
    pub fn emitted(&self) -> u64 {
        match *self {
            Outcome::Completed { emitted } | Outcome::ConsumerClosed { emitted } => emitted,
        }
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase {
    config: GenerateConfig,
}

impl GenerateUseCase {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Full run against the filesystem: load the configured wordlist,
    /// then stream to the configured output.
    pub fn execute<D: Write>(&self, diag: &mut D) -> Result<Outcome, GenerateError> {
        let loader = WordlistLoader::new(&self.config.wordlist);
        self.execute_from(&loader, diag)
    }

    /// Same as `execute`, with the words coming from any WordSource.
    pub fn execute_from<S, D>(&self, source: &S, diag: &mut D) -> Result<Outcome, GenerateError>
    where
        S: WordSource,
        D: Write,
    {
        // ── Step 1: Loading ───────────────────────────────────────────────────
        let wordlist = source.load()?;

        // ── Step 2: Output target ─────────────────────────────────────────────
        // Opened only after a successful load so a missing wordlist never
        // truncates an existing output file.
        match &self.config.output {
            Some(path) => {
                let file = File::create(path).map_err(|e| GenerateError::OpenOutput {
                    path:   path.clone(),
                    source: e,
                })?;
                tracing::info!("Writing candidates to '{}'", path.display());
                self.stream(&wordlist, file, diag)
            }
            None => {
                let stdout = io::stdout();
                self.stream(&wordlist, stdout.lock(), diag)
            }
        }
    }

    /// Report counts on `diag`, then write every candidate to `out`.
    pub fn stream<W, D>(&self, wordlist: &Wordlist, out: W, diag: &mut D) -> Result<Outcome, GenerateError>
    where
        W: Write,
        D: Write,
    {
        // ── Step 3: Diagnostics ───────────────────────────────────────────────
        // Advisory only; a broken stderr must not stop generation.
        if let Err(e) = announce(wordlist, self.config.skip_self, diag) {
            tracing::debug!("Could not write diagnostics: {e}");
        }

        if wordlist.is_empty() {
            tracing::info!("Wordlist is empty, no candidates to generate");
        }

        // ── Step 4: Streaming ─────────────────────────────────────────────────
        let started  = Instant::now();
        let mut sink = CandidateSink::new(out);

        for candidate in Combiner::new(wordlist.words(), self.config.skip_self) {
            if let Err(e) = sink.emit(candidate) {
                return stop_on_write_error(e, sink.emitted());
            }
        }

        // ── Step 5: Flush ─────────────────────────────────────────────────────
        if let Err(e) = sink.finish() {
            return stop_on_write_error(e, sink.emitted());
        }

        tracing::info!(
            "Generated {} candidates in {:.2?}",
            sink.emitted(),
            started.elapsed()
        );
        Ok(Outcome::Completed { emitted: sink.emitted() })
    }
}

/// Write the word/candidate count line and, if needed, the self-pair note.
fn announce<D: Write>(wordlist: &Wordlist, skip_self: bool, diag: &mut D) -> io::Result<()> {
    writeln!(
        diag,
        "# words: {}. producing {} candidates (including self-pairs)",
        wordlist.len(),
        wordlist.candidate_count()
    )?;
    if skip_self {
        writeln!(diag, "# skipping self-pairs (w1 == w2)")?;
    }
    diag.flush()
}

/// A closed consumer ends the run cleanly; anything else is fatal.
fn stop_on_write_error(err: io::Error, emitted: u64) -> Result<Outcome, GenerateError> {
    if is_consumer_closed(&err) {
        tracing::debug!("Consumer closed the output after {emitted} candidates");
        Ok(Outcome::ConsumerClosed { emitted })
    } else {
        Err(GenerateError::Write(err))
    }
}
