//! Listing-page scan: anchors in, deduplicated [`Article`]s out.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;
use url::Url;
use wa_core::{Article, Keywords};

use crate::ScraperConfig;

pub mod strategies;

use strategies::{first_match, Candidate, SUMMARY_LOOKUPS, TITLE_LOOKUPS};

lazy_static! {
    static ref ANCHOR: Selector = Selector::parse("a[href]").unwrap();
    static ref ARTICLE_PATH: Regex = Regex::new(r"/\d+\.html").unwrap();
}

/// Why a candidate anchor did not become an article.
#[derive(Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("href is empty, a fragment or a script")]
    NotNavigable,
    #[error("cannot resolve {href}: {reason}")]
    Unresolvable { href: String, reason: url::ParseError },
    #[error("not an article link: {0}")]
    NotArticle(String),
    #[error("no usable title for {0}")]
    NoTitle(String),
    #[error("no keyword in {0}")]
    KeywordMismatch(String),
}

/// Scans `html` for article links, resolving them against `base`.
///
/// Output keeps document order; the first article seen for a URL wins and
/// later ones are dropped.
pub fn extract_articles(html: &str, base: &Url, keywords: &Keywords, config: &ScraperConfig) -> Vec<Article> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut articles = Vec::new();

    for anchor in document.select(&ANCHOR).take(config.max_anchors) {
        match evaluate_candidate(anchor, base, keywords, config) {
            Ok(article) => {
                if seen.insert(article.url.clone()) {
                    articles.push(article);
                } else {
                    debug!("Skipping duplicate {}", article.url);
                }
            }
            Err(rejection) => debug!("Skipping anchor: {}", rejection),
        }
    }

    articles
}

pub fn evaluate_candidate(
    anchor: ElementRef<'_>,
    base: &Url,
    keywords: &Keywords,
    config: &ScraperConfig,
) -> Result<Article, Rejection> {
    let href = anchor.value().attr("href").unwrap_or_default().trim();
    if href.is_empty() || href.starts_with('#') || href.to_lowercase().contains("javascript") {
        return Err(Rejection::NotNavigable);
    }

    let url = base.join(href).map_err(|reason| Rejection::Unresolvable {
        href: href.to_string(),
        reason,
    })?;
    if !ARTICLE_PATH.is_match(url.path()) {
        return Err(Rejection::NotArticle(url.to_string()));
    }

    let candidate = Candidate::new(anchor);
    let title = first_match(TITLE_LOOKUPS, &candidate, config)
        .ok_or_else(|| Rejection::NoTitle(url.to_string()))?;
    let summary = first_match(SUMMARY_LOOKUPS, &candidate, config).unwrap_or_default();

    if !keywords.matches(&format!("{} {}", title, summary)) {
        return Err(Rejection::KeywordMismatch(url.to_string()));
    }

    Ok(Article::new(title, url.to_string(), summary))
}
