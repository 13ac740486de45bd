#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Initializes a fmt subscriber for the example binaries. Filter with
/// `RUST_LOG`, defaulting to `debug` so grid construction logging shows up.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();
}
