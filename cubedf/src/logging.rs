use std::error::Error;
use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, logging to stderr.
///
/// An explicit `level` (any `EnvFilter` directive) wins over `RUST_LOG`, which
/// wins over the default `info`.
pub fn init_tracing(level: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| format!("invalid log level '{}': {}", directive, e))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialise tracing: {}", e))?;
    Ok(())
}
