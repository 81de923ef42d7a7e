//! Logging setup for the Tokenaudit CLI
//!
//! Verbosity flags map to a tracing level filter; `RUST_LOG` takes
//! precedence when set so module-level filtering keeps working.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Derive the default level filter from the -v count
fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber
pub fn init(verbosity: u8, quiet: bool, use_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))
}
