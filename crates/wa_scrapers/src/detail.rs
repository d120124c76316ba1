//! Detail enrichment: visit each article page and attach what the model makes of it.

use tracing::warn;
use wa_core::text::truncate_chars;
use wa_core::{Article, ArticleDetail};
use wa_inference::prompts::{extraction_prompt, parse_extracted_fields};
use wa_inference::{GenerationOptions, InferenceModel};

use crate::fetch::PageFetcher;
use crate::logging::Logger;
use crate::markdown::html_to_markdown;
use crate::ScraperConfig;

/// Returns `None` when the page itself could not be loaded. A model failure
/// still yields a detail carrying only the raw text.
pub async fn fetch_detail(
    fetcher: &dyn PageFetcher,
    model: &dyn InferenceModel,
    url: &str,
    config: &ScraperConfig,
) -> Option<ArticleDetail> {
    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            return None;
        }
    };

    let markdown = match html_to_markdown(&html) {
        Ok(markdown) => markdown,
        Err(e) => {
            warn!("Failed to convert {}: {}", url, e);
            return None;
        }
    };
    let raw_markdown = truncate_chars(&markdown, config.raw_markdown_chars).to_string();

    match model
        .complete(&extraction_prompt(&markdown), &GenerationOptions::extraction())
        .await
    {
        Ok(reply) => Some(ArticleDetail {
            url: url.to_string(),
            fields: parse_extracted_fields(&reply),
            llm_extracted: Some(reply),
            raw_markdown,
        }),
        Err(e) => {
            warn!("⚠️ Model extraction failed for {}: {}", url, e);
            Some(ArticleDetail::raw_only(url, raw_markdown))
        }
    }
}

/// Enriches the first `detail_limit` articles in order, one at a time, with a
/// fixed pause between fetches. Returns how many received a detail.
pub async fn enrich_articles(
    fetcher: &dyn PageFetcher,
    model: &dyn InferenceModel,
    articles: &mut [Article],
    config: &ScraperConfig,
) -> usize {
    let limit = articles.len().min(config.detail_limit);
    let mut enriched = 0;

    for (i, article) in articles.iter_mut().take(limit).enumerate() {
        if i > 0 && !config.detail_pause.is_zero() {
            tokio::time::sleep(config.detail_pause).await;
        }

        let logger = Logger::new().with_prefix(format!("[{}/{}]", i + 1, limit));
        logger.info(&format!("{}...", truncate_chars(&article.title, 40)));

        article.detail = fetch_detail(fetcher, model, &article.url, config).await;
        match &article.detail {
            Some(detail) if detail.has_model_output() => {
                enriched += 1;
                logger.debug("detail extracted");
            }
            Some(_) => {
                enriched += 1;
                logger.debug("raw text only");
            }
            None => logger.warn("no detail"),
        }
    }

    enriched
}
