use std::path::Path;
use std::sync::Arc;

use tracing::info;
use url::Url;
use wa_core::{Error, ExtractionResult, Keywords, Result};
use wa_inference::InferenceModel;

use crate::detail::enrich_articles;
use crate::extract::extract_articles;
use crate::fetch::PageFetcher;
use crate::report::{self, Summary};
use crate::ScraperConfig;

/// Runs the whole listing -> filter -> detail -> report sequence.
pub struct ExtractionManager {
    fetcher: Arc<dyn PageFetcher>,
    inference: Arc<dyn InferenceModel>,
    config: ScraperConfig,
}

impl ExtractionManager {
    pub fn new(fetcher: Arc<dyn PageFetcher>, inference: Arc<dyn InferenceModel>, config: ScraperConfig) -> Self {
        Self {
            fetcher,
            inference,
            config,
        }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetches the listing page, extracts and enriches articles.
    ///
    /// Only a failure to load the listing page itself is an error.
    pub async fn run(&self, source_url: &str, keywords: Keywords) -> Result<ExtractionResult> {
        let source = Url::parse(source_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", source_url, e)))?;

        info!("🌐 Fetching: {}", source);
        info!("🔑 Keywords: {}", keywords);
        let html = self
            .fetcher
            .fetch(source.as_str())
            .await
            .map_err(|e| Error::Scraping(format!("Failed to fetch webpage {}: {}", source, e)))?;
        info!("✨ Success! HTML size: {} chars", html.chars().count());

        let base = self.config.base_for(&source);
        let mut articles = extract_articles(&html, base, &keywords, &self.config);
        info!("📰 Found {} articles", articles.len());

        if !articles.is_empty() && self.config.detail_limit > 0 {
            info!("🔍 Extracting details...");
            let enriched = enrich_articles(
                self.fetcher.as_ref(),
                self.inference.as_ref(),
                &mut articles,
                &self.config,
            )
            .await;
            info!("✨ Enriched {} articles", enriched);
        }

        Ok(ExtractionResult::new(source_url, keywords, articles))
    }

    /// Writes the result file, then the model summary when enabled.
    /// The result file is written even if the summary fails.
    pub async fn report(&self, result: &ExtractionResult, output: &Path) -> Result<Option<Summary>> {
        report::write_result(output, result).await?;
        if !self.config.summarize {
            return Ok(None);
        }
        info!("🤖 Generating summary with {}...", self.inference.name());
        Ok(report::write_summary(self.inference.as_ref(), result, output).await)
    }
}
