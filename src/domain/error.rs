// Error types shared across layers
use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the monitoring service API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid root URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fatal errors that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to search for dashboards: {0}")]
    Search(#[source] ApiError),

    #[error("failed to get dashboard {uri}: {source}")]
    Fetch {
        uri: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dashboard reference {0:?} has no usable base name")]
    InvalidReference(String),
}
