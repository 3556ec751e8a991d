// ============================================================
// Layer 5: Logging Setup
// ============================================================
// RUST_LOG wins when it is set. Otherwise the -v count picks the
// level for this crate:
//
//   (none) → warn    -v → info    -vv → debug    -vvv → trace
//
// Events always go to stderr; stdout is reserved for candidates.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given -v count.
pub fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wordpair_gen=warn",
        1 => "wordpair_gen=info",
        2 => "wordpair_gen=debug",
        _ => "wordpair_gen=trace",
    }
}

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
