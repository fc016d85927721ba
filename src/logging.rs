//! File-backed `tracing` subscriber.
//!
//! The alternate screen belongs to the UI, so nothing is written to stdout
//! or stderr while it runs.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "MEALBROWSE_LOG";

/// Build the filter: `MEALBROWSE_LOG` wins over the configured directives.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let path = config.file_path();
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory '{}'", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))
}
