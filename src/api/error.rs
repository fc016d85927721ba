use thiserror::Error;

/// Errors from talking to the recipe API.
///
/// Views collapse every variant into a single failure path; the variants
/// exist for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The base URL plus endpoint did not form a valid URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, timeout, or body read failure.
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("'{endpoint}' returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The body was not the expected JSON shape.
    #[error("Failed to decode '{endpoint}' response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ClientBuild(_) => "client_build",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }
}
