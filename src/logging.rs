//! File-only tracing setup.
//!
//! The games own the terminal, so logs never go to stdout or stderr.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a subscriber writing to `path` when one is given.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("install tracing subscriber")
}
