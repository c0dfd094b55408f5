use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// Reports go to stdout, so diagnostics never share a stream with them.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
