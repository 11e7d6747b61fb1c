use crate::decode::decode_text;
use crate::error::{FetchError, FetchResult};
use crate::playlist::{check_playlist, preview, PlaylistCheck};
use crate::scraper::{Scraper, ScraperConfig, ACCEPT, USER_AGENT};
use crate::url_types::{is_playlist_url, RegularUrl};

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::header;

pub const UNKNOWN_CONTENT_TYPE: &str = "unknown";

/// Decoded body of a successful fetch.
#[derive(Debug, PartialEq, Clone)]
pub struct Fetched {
    pub body: String,
    pub content_type: Option<String>,
    /// Marker check outcome, `None` unless the URL names a playlist file.
    pub playlist: Option<PlaylistCheck>,
}

impl Fetched {
    pub fn is_playlist(&self) -> bool {
        self.playlist.is_some()
    }
}

/// Scraper for regular http(s) URLs.
///
/// Every call builds its own client and drops it before returning, so calls
/// share nothing and may run concurrently from any number of tasks.
#[derive(Debug, Clone, Default)]
pub struct HttpScraper {
    config: ScraperConfig,
    target: Option<RegularUrl>,
}

impl HttpScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            target: None,
        }
    }

    pub fn for_url(url: &RegularUrl, config: ScraperConfig) -> Self {
        Self {
            config,
            target: Some(url.clone()),
        }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn target(&self) -> Option<&RegularUrl> {
        self.target.as_ref()
    }

    /// Fetch the URL this scraper was constructed for.
    pub async fn scrape(&self) -> FetchResult<Fetched> {
        match &self.target {
            Some(target) => self.fetch(target.as_str()).await,
            None => {
                let e = FetchError::InvalidUrl("scraper was built without a target URL".to_string());
                error!(
                    "Error fetching content: {}. Content-Type: {}",
                    e, UNKNOWN_CONTENT_TYPE
                );
                Err(e)
            }
        }
    }

    pub async fn fetch(&self, url: &str) -> FetchResult<Fetched> {
        let is_playlist = is_playlist_url(url);
        if is_playlist {
            info!("Detected direct playlist URL: {}", url);
        } else {
            info!("Fetching HTTP content from: {}", url);
        }

        let mut content_type = None;
        let body = match self.request(url, &mut content_type).await {
            Ok(body) => body,
            Err(e) => {
                error!(
                    "Error fetching content from {}: {}. Content-Type: {}",
                    url,
                    e,
                    content_type.as_deref().unwrap_or(UNKNOWN_CONTENT_TYPE)
                );
                return Err(e);
            }
        };

        let playlist = if is_playlist {
            let check = check_playlist(&body);
            match check {
                PlaylistCheck::Valid => info!(
                    "Successfully fetched playlist from {} ({} bytes)",
                    url,
                    body.len()
                ),
                PlaylistCheck::Suspicious => warn!(
                    "Content from {} doesn't appear to be a valid M3U file. First 100 chars: {}",
                    url,
                    preview(&body)
                ),
            }
            Some(check)
        } else {
            None
        };

        Ok(Fetched {
            body,
            content_type,
            playlist,
        })
    }

    /// One GET on a fresh client. `content_type` is filled in as soon as a
    /// response exists so the caller can report it on failure.
    async fn request(&self, url: &str, content_type: &mut Option<String>) -> FetchResult<String> {
        let target = RegularUrl::parse(url)?;
        let timeout = self.config.timeout;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        let response = client
            .get(target.as_str())
            .header(header::ACCEPT, ACCEPT)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url, timeout))?;
        *content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url, timeout))?;
        decode_text(&bytes, content_type.as_deref()).map_err(|charset| FetchError::Decode {
            charset: charset.to_string(),
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Scraper for HttpScraper {
    async fn fetch_content(&self, url: &str) -> FetchResult<String> {
        self.fetch(url).await.map(|fetched| fetched.body)
    }
}
