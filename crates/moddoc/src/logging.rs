//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the rendered document. `-v`
//! turns on debug output for the moddoc crates; otherwise `RUST_LOG` decides
//! and nothing is printed when it is unset.

use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "moddoc=debug,moddoc_render=debug";

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .try_init();
}
