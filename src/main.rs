mod args;
mod env;
mod logger;

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use log::{debug, error, info};
use playlist_fetch::report::{self, FetchReport};
use playlist_fetch::{HttpScraper, RegularUrl, ScraperConfig};
use std::io::Write;
use std::process::exit;
use structopt::StructOpt;

async fn run(args: &args::Args) -> Result<()> {
    let url = RegularUrl::parse(&args.url)?;
    let config = match env::timeout_secs(args.timeout)? {
        Some(secs) => {
            ensure!(secs > 0, "Timeout must be at least 1 second");
            ScraperConfig::from_secs(secs)
        }
        None => ScraperConfig::default(),
    };
    debug!("config: {:?}", config);

    let scraper = HttpScraper::for_url(&url, config);
    let fetched = scraper.scrape().await?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, fetched.body.as_bytes())
                .await
                .with_context(|| format!("Failed to write content to {}", path.display()))?;
            info!("Wrote {} bytes to {}", fetched.body.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(fetched.body.as_bytes())
                .context("Failed to write content to stdout")?;
            handle.flush()?;
        }
    }

    if let Some(path) = &args.report {
        report::write_report(&FetchReport::new(url.as_str(), &fetched), path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Wrote fetch report to {}", path.display());
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() {
    let args = args::Args::from_args();
    logger::init_logger(args.verbose);

    info!("{} playlist-fetch", "Start".green());
    debug!("args: {:?}", args);

    info!("{} fetch", "Running".green());
    match run(&args).await {
        Ok(()) => info!("{} fetch", "Success".green()),
        Err(e) => {
            error!("{} to fetch with error: {}", "Failed".red(), e);
            exit(1);
        }
    }
}
