//! Diagnostic logging setup
//!
//! Progress that operators need to see is printed to stdout by the commands.
//! Everything else goes through `tracing` to stderr, controlled by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}
