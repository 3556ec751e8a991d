// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands a GenerateConfig to
// Layer 2. Nothing here knows how pairs are produced.
//
// Usage:
//   wordpair-gen wordlist.txt > combos.txt
//   wordpair-gen --no-self wordlist.txt | hashcat -m 3200 -a 0 hashes.txt --stdin
//
// Reference: Rust Book §12 (Building a CLI Program)

pub mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser};
use commands::GenerateArgs;
use std::io;

use crate::application::generate_use_case::{GenerateUseCase, Outcome};

#[derive(Parser, Debug)]
#[command(
    name = "wordpair-gen",
    version,
    about = "Stream all word1+word2 combos from a wordlist."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Run the generator. Diagnostics go to stderr.
    pub fn run(self) -> Result<()> {
        let use_case = GenerateUseCase::new(self.args.into());

        tracing::debug!("Config: {:?}", use_case.config());

        let outcome = use_case.execute(&mut io::stderr())?;
        tracing::debug!(
            emitted = outcome.emitted(),
            consumer_closed = matches!(outcome, Outcome::ConsumerClosed { .. }),
            "Run finished"
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generate_use_case::GenerateConfig;
    use crate::domain::error::GenerateError;
    use clap::CommandFactory;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wordpair-gen"]).unwrap();
        let cfg = GenerateConfig::from(cli.args);
        assert_eq!(cfg, GenerateConfig::default());
        assert_eq!(cfg.wordlist, PathBuf::from("wordlist.txt"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "wordpair-gen", "--no-self", "-o", "out.txt", "-vv", "words.txt",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let cfg = GenerateConfig::from(cli.args);
        assert!(cfg.skip_self);
        assert_eq!(cfg.wordlist, PathBuf::from("words.txt"));
        assert_eq!(cfg.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_run_writes_candidates_and_succeeds() {
        let dir  = tempfile::tempdir().unwrap();
        let list = dir.path().join("words.txt");
        let dest = dir.path().join("combos.txt");
        std::fs::write(&list, "ab\ncd\n").unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("wordpair-gen"),
            OsStr::new("--no-self"),
            OsStr::new("-o"),
            dest.as_os_str(),
            list.as_os_str(),
        ])
        .unwrap();
        cli.run().unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "abcd\ncdab\n");
    }

    #[test]
    fn test_run_reports_missing_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            OsStr::new("wordpair-gen"),
            dir.path().join("missing.txt").as_os_str(),
        ])
        .unwrap();

        let err = cli.run().unwrap_err();
        let gen = err.downcast_ref::<GenerateError>().unwrap();
        assert_eq!(gen.exit_code(), 2);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["wordpair-gen", "--separator", ":"]).is_err());
    }
}
