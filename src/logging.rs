//! Diagnostic logging setup.
//!
//! Logs go to stderr so that `fetch` output on stdout stays usable from shell
//! startup scripts.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `debug` forces debug-level output for this
/// crate; otherwise `RUST_LOG` applies, defaulting to warnings only.
pub fn init(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("mementor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore the error if a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
