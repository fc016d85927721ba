use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the recipe API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the API version path
    /// (e.g., "https://www.themealdb.com/api/json/v1/1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Meal list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Search term sent to `search.php` when the list view mounts.
    #[serde(default = "default_query")]
    pub query: String,
}

/// Log output settings.
///
/// The terminal belongs to the UI, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. Defaults to `<cache_dir>/mealbrowse/mealbrowse.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directives used when `MEALBROWSE_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_query() -> String {
    "chicken".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            query: default_query(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_filter(),
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("mealbrowse")
                .join("mealbrowse.log")
        })
    }
}
