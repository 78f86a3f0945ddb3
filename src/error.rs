use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while crawling the directory or persisting its results
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid URL \"{url}\": {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector \"{selector}\": {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CrawlError {
    /// Whether the error came from the network rather than from local setup
    pub fn is_transport(&self) -> bool {
        matches!(self, CrawlError::Transport { .. } | CrawlError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
