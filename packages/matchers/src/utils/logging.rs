// Логирование

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber for test binaries, filtered by `RUST_LOG`.
///
/// Call it at the top of each integration test (or a shared test helper)
/// so `RUST_LOG=construct_matchers=trace cargo test` shows matcher
/// registration, evaluation and message rendering. Returns `false` when a
/// global subscriber was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok()
}
