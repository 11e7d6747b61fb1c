use serde::{Deserialize, Serialize};

pub const EXTM3U_MARKER: &str = "#EXTM3U";
pub const ACESTREAM_SCHEME: &str = "acestream://";

/// Number of characters of a suspicious body quoted in the warning.
pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistCheck {
    Valid,
    Suspicious,
}

/// Presence check only: an M3U header or at least one acestream link.
pub fn check_playlist(content: &str) -> PlaylistCheck {
    if content.trim().starts_with(EXTM3U_MARKER) || content.contains(ACESTREAM_SCHEME) {
        PlaylistCheck::Valid
    } else {
        PlaylistCheck::Suspicious
    }
}

/// First `PREVIEW_CHARS` characters of `content`, cut on a char boundary.
pub fn preview(content: &str) -> &str {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
