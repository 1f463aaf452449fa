//! Diagnostic subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Filter used when `RUST_LOG` is unset and output is suppressed
pub const QUIET_FILTER: &str = "error";

/// Build the filter, preferring `RUST_LOG` over the defaults
pub fn env_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if quiet { QUIET_FILTER } else { DEFAULT_FILTER })
    })
}

/// Install the global fmt subscriber writing to stderr
///
/// Returns `false` if a subscriber was already installed, which happens when the
/// library is embedded in a host that configured tracing itself.
pub fn init(quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
