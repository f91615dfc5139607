//! Tracing setup for tests
//!
//! Fixture generators emit `trace!` events. Tests that want to see them call
//! [`init_test_tracing`], which installs a plain-text subscriber writing
//! through the test harness so output is captured per test.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_TEST_FILTER: &str = "warn,certgen=debug";

/// Install a test subscriber honoring `RUST_LOG`
///
/// Safe to call from every test: once a global subscriber exists, later
/// calls are no-ops. Returns true if this call installed the subscriber.
pub fn init_test_tracing() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_noop() {
        init_test_tracing();
        assert!(!init_test_tracing());
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_TEST_FILTER).is_ok());
    }
}
