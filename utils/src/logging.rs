//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence; otherwise the
/// supplied default filter applies.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
