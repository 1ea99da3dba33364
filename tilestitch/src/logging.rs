//! Logging initialization.
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr.
//! The filter comes from `RUST_LOG` when set, otherwise from the given
//! default level.

use tracing_subscriber::EnvFilter;

/// Initialize logging with the given default filter (e.g., "info").
///
/// Safe to call once per process; subsequent calls are ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
