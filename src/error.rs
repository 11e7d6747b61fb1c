use std::time::Duration;
use thiserror::Error;

/// Failure of a single fetch. Every variant is logged once by the scraper
/// before it reaches the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request to {url} timed out after {}s", .timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    #[error("HTTP status {status} for URL: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Response body from {url} is not valid {charset} text")]
    Decode { charset: String, url: String },
}

impl FetchError {
    /// Network level failure: DNS, connect, body read or timeout.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(error: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            FetchError::Transport(error)
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
