use crate::error::FetchResult;

use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Constructor-level settings shared by every scraper strategy.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ScraperConfig {
    /// Bounds the whole request: connect, headers and body.
    pub timeout: Duration,
}

impl ScraperConfig {
    pub fn from_secs(secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(secs),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::from_secs(DEFAULT_TIMEOUT_SECS)
    }
}

/// A strategy that turns one URL into text content. Retrying is left to the
/// caller.
#[async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch_content(&self, url: &str) -> FetchResult<String>;
}
