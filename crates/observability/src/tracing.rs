//! Process-wide subscriber for the wizcoin binaries.
//!
//! Stdout belongs to program output (the purse reports), so every log line
//! goes to stderr as JSON. `RUST_LOG` selects the filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON-on-stderr subscriber.
///
/// A subscriber installed earlier (by a test harness or a previous call) is
/// left in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
