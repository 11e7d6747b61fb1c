pub mod decode;
pub mod error;
pub mod http;
pub mod playlist;
pub mod report;
pub mod scraper;
pub mod url_types;

pub use error::{FetchError, FetchResult};
pub use http::{Fetched, HttpScraper};
pub use playlist::PlaylistCheck;
pub use scraper::{Scraper, ScraperConfig};
pub use url_types::RegularUrl;
