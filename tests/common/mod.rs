//! Shared helpers for the integration tests.

/// Installs a test-writer tracing subscriber once per test binary.
///
/// Later calls are ignored, so every test may call this unconditionally.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("fiat_shamir=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Messages used throughout the scenario tests.
pub const SCENARIO: [&str; 3] = ["111", "aaa", "333"];
