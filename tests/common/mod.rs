//! Shared setup for the integration suites.

/// Route engine logs to the test output. Filter with `RUST_LOG`, e.g.
/// `RUST_LOG=recursion_ccg=debug cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
