use anyhow::{anyhow, Result};
use dotenv::dotenv;
use std::env;

pub const TIMEOUT_ENV: &str = "PLAYLIST_FETCH_TIMEOUT";

/// Priority:
///
/// 1. Command line options
/// 2. `PLAYLIST_FETCH_TIMEOUT` (a `.env` file is honoured)
/// 3. None, leaving the scraper default in place
pub fn timeout_secs(arg_timeout: Option<u64>) -> Result<Option<u64>> {
    dotenv().ok();
    match arg_timeout {
        Some(secs) => Ok(Some(secs)),
        None => match env::var(TIMEOUT_ENV) {
            Ok(value) => parse_timeout(&value).map(Some),
            Err(_) => Ok(None),
        },
    }
}

fn parse_timeout(value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|e| {
        anyhow!(
            "Invalid {} value: {:?} ({}). Please set a number of seconds.",
            TIMEOUT_ENV,
            value,
            e
        )
    })
}
