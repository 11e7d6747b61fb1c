use std::path::PathBuf;
use structopt::{clap, StructOpt};

#[derive(StructOpt, Debug, PartialEq, Clone)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION"),
)]
#[structopt(setting(clap::AppSettings::ColoredHelp))]
pub struct Args {
    /// URL to fetch (http or https).
    pub url: String,

    /// Request timeout in seconds, covering connect and body read. [default: 10]
    #[structopt(short, long)]
    pub timeout: Option<u64>,

    /// Write the fetched content to this file instead of stdout.
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Write a fetch report (.yml, .yaml or .json).
    #[structopt(long, parse(from_os_str))]
    pub report: Option<PathBuf>,

    /// Verbose mode.
    #[structopt(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::from_iter(&["playlist-fetch", "http://x/test.m3u8"]);
        assert_eq!(
            args,
            Args {
                url: "http://x/test.m3u8".to_string(),
                timeout: None,
                output: None,
                report: None,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_all_options() {
        let args = Args::from_iter(&[
            "playlist-fetch",
            "http://x/page.html",
            "--timeout",
            "3",
            "-o",
            "page.html",
            "--report",
            "report.json",
            "-v",
        ]);
        assert_eq!(
            args,
            Args {
                url: "http://x/page.html".to_string(),
                timeout: Some(3),
                output: Some(PathBuf::from("page.html")),
                report: Some(PathBuf::from("report.json")),
                verbose: true,
            }
        );
    }
}
