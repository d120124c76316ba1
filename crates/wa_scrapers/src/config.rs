use std::time::Duration;

use url::Url;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Knobs for the listing scan and the detail loop.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Base for resolving relative links. `None` means the source page URL.
    pub base_url: Option<Url>,
    pub user_agent: String,
    pub fetch_timeout: Duration,
    /// Only this many anchors, in document order, are looked at.
    pub max_anchors: usize,
    /// Anchor text at least this long is taken as the title outright.
    pub min_title_chars: usize,
    /// Shortest title accepted from any fallback.
    pub min_fallback_title_chars: usize,
    pub summary_chars: usize,
    /// Only the first N articles get detail enrichment.
    pub detail_limit: usize,
    pub detail_pause: Duration,
    pub raw_markdown_chars: usize,
    pub summarize: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout: Duration::from_secs(30),
            max_anchors: 150,
            min_title_chars: 10,
            min_fallback_title_chars: 5,
            summary_chars: 200,
            detail_limit: 10,
            detail_pause: Duration::from_millis(300),
            raw_markdown_chars: 3000,
            summarize: true,
        }
    }
}

impl ScraperConfig {
    /// The base used for link resolution when scanning `source`.
    pub fn base_for<'a>(&'a self, source: &'a Url) -> &'a Url {
        self.base_url.as_ref().unwrap_or(source)
    }
}
