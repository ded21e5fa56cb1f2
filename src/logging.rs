//! Diagnostic logging via `tracing`.
//!
//! Library code only emits events; the binary installs the subscriber.
//! Output goes to stderr so reports on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set and valid, else `level` for this crate.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solar_balance={level}")))
}

/// Installs a compact stderr subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
