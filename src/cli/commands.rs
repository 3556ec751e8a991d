// ============================================================
// Layer 1: CLI Arguments
// ============================================================
// The flags of the single generate command, and their conversion
// into the application-layer GenerateConfig.

use clap::Args;
use std::path::PathBuf;

use crate::application::generate_use_case::GenerateConfig;

/// Arguments controlling one generation run.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the wordlist, one word per line
    #[arg(value_name = "WORDLIST", default_value = "wordlist.txt")]
    pub wordlist: PathBuf,

    /// Skip pairs where word1 == word2
    #[arg(long = "no-self")]
    pub no_self: bool,

    /// Write candidates to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// The application layer never sees clap types.
impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            wordlist:  a.wordlist,
            skip_self: a.no_self,
            output:    a.output,
        }
    }
}
