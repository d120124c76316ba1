pub mod cli;
pub mod config;
pub mod detail;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod manager;
pub mod markdown;
pub mod report;

pub use config::ScraperConfig;
pub use extract::extract_articles;
pub use fetch::{HttpFetcher, PageFetcher};
pub use manager::ExtractionManager;

pub use cli::{handle_command, ExtractArgs};

pub mod prelude {
    pub use super::extract::extract_articles;
    pub use super::fetch::PageFetcher;
    pub use super::ScraperConfig;
    pub use wa_core::{Article, Error, ExtractionResult, Keywords, Result};
}
