//! Diagnostic logging.
//!
//! Operator-facing messages are printed directly. This is the developer
//! channel: `tracing` events on stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `verbose` forces `debug` for this crate.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ml_bootstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ml_bootstrap=warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
