use crate::error::{FetchError, FetchResult};

use std::fmt;
use url::Url;

const PLAYLIST_SUFFIXES: [&str; 2] = [".m3u", ".m3u8"];

/// A plain http(s) location handed to the HTTP scraper.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RegularUrl {
    url: Url,
}

impl RegularUrl {
    pub fn parse(location: impl AsRef<str>) -> FetchResult<Self> {
        let location = location.as_ref().trim();
        if location.is_empty() {
            return Err(FetchError::InvalidUrl("empty URL".to_string()));
        }
        let url = Url::parse(location)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", location, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(Self { url }),
            scheme => Err(FetchError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                location, scheme
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn is_playlist(&self) -> bool {
        has_playlist_suffix(self.url.path())
    }
}

impl fmt::Display for RegularUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Whether `location` points directly at an M3U/M3U8 file.
///
/// The path component is inspected when the string parses as a URL, so query
/// strings and fragments do not hide the suffix. Anything else is matched as a
/// raw string.
pub fn is_playlist_url(location: &str) -> bool {
    match Url::parse(location) {
        Ok(url) => has_playlist_suffix(url.path()),
        Err(_) => has_playlist_suffix(location),
    }
}

fn has_playlist_suffix(path: &str) -> bool {
    let path = path.to_lowercase();
    PLAYLIST_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix))
}
