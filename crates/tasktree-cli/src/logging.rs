use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Calling this twice
/// is harmless; the first subscriber stays installed.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
