//! Logging support for mazecut
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from
//! `RUST_LOG` and defaults to warnings only, so a successful run prints nothing.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

const DEFAULT_FILTER: &str = "mazecut=warn";

/// Build the filter used by the subscriber
fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the logging system
pub fn init_logging() -> Result<()> {
    let subscriber = registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(build_filter());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}
