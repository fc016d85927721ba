use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mealbrowse::cli::Cli;
use mealbrowse::logging::init_tracing;
use mealbrowse::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("mealbrowse-fetch")
        .build()
        .context("failed to start async runtime")?;

    let result = runtime::run(&config, tokio_runtime.handle().clone());
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "ui terminated with error");
    }

    // Fetches still in flight are abandoned.
    tokio_runtime.shutdown_timeout(Duration::from_millis(200));
    result
}
