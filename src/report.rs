use crate::http::Fetched;
use crate::playlist::PlaylistCheck;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FetchReport {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub content_type: Option<String>,
    pub bytes: usize,
    pub sha256: String,
    pub is_playlist: bool,
    pub playlist_check: Option<PlaylistCheck>,
}

impl FetchReport {
    pub fn new(url: impl AsRef<str>, fetched: &Fetched) -> Self {
        Self {
            url: url.as_ref().to_string(),
            fetched_at: Utc::now(),
            content_type: fetched.content_type.clone(),
            bytes: fetched.body.len(),
            sha256: format!("{:x}", Sha256::digest(fetched.body.as_bytes())),
            is_playlist: fetched.is_playlist(),
            playlist_check: fetched.playlist,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum FileExt {
    Yaml,
    Json,
}

pub fn parse_file_ext(path: impl AsRef<Path>) -> Result<FileExt> {
    match path.as_ref().extension() {
        Some(ext) => match ext.to_str() {
            Some("yml") => Ok(FileExt::Yaml),
            Some("yaml") => Ok(FileExt::Yaml),
            Some("json") => Ok(FileExt::Json),
            Some(ext) => bail!("Unsupported report file extension: {}", ext),
            None => bail!("Unsupported report file extension"),
        },
        None => Ok(FileExt::Yaml),
    }
}

pub fn write_report(report: &FetchReport, path: impl AsRef<Path>) -> Result<()> {
    let ext = parse_file_ext(&path)?;
    let content = match ext {
        FileExt::Yaml => serde_yaml::to_string(report)?,
        FileExt::Json => serde_json::to_string_pretty(report)?,
    };
    let mut buffer = BufWriter::new(fs::File::create(path)?);
    buffer.write_all(content.as_bytes())?;
    buffer.flush()?;

    Ok(())
}
