use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Browse TheMealDB recipes in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mealbrowse", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/mealbrowse/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the search term used by the meal list.
    #[arg(long, value_name = "TERM")]
    pub query: Option<String>,

    /// Override the log file path.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(query) = &self.query {
            config.list.query = query.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
