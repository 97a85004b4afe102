//! Logging init: a `tracing-subscriber` fmt subscriber writing to stderr.
//!
//! The library itself only emits `tracing` events; hosts that already
//! install a subscriber should not call this.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,media_vdom=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. Returns `false` when a global subscriber
/// was already set (e.g. a second call from another test).
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}

/// Like [`init`], but routes output through the test harness capture.
pub fn init_for_tests() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
