use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
