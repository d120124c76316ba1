//! Title and summary lookups for a link candidate.
//!
//! Each lookup is independent and returns `None` when it has nothing usable;
//! [`first_match`] walks an ordered list and stops at the first hit.

use lazy_static::lazy_static;
use scraper::{ElementRef, Selector};
use wa_core::text::{char_len, join_stripped, truncate_chars};

use crate::ScraperConfig;

lazy_static! {
    static ref HEADING: Selector = Selector::parse("h1, h2, h3, h4, span, p").unwrap();
    static ref PARAGRAPH: Selector = Selector::parse("p").unwrap();
}

const BLOCK_CONTAINERS: &[&str] = &["div", "li", "article"];

/// An anchor plus the nearest block that encloses it.
pub struct Candidate<'a> {
    pub anchor: ElementRef<'a>,
    pub container: Option<ElementRef<'a>>,
}

impl<'a> Candidate<'a> {
    pub fn new(anchor: ElementRef<'a>) -> Self {
        Self {
            anchor,
            container: enclosing_block(anchor),
        }
    }
}

pub type Lookup = fn(&Candidate<'_>, &ScraperConfig) -> Option<String>;

pub const TITLE_LOOKUPS: &[Lookup] = &[anchor_text, fallback_title];

pub const SUMMARY_LOOKUPS: &[Lookup] = &[container_paragraph];

pub fn first_match(lookups: &[Lookup], candidate: &Candidate<'_>, config: &ScraperConfig) -> Option<String> {
    lookups.iter().find_map(|lookup| lookup(candidate, config))
}

pub fn element_text(element: ElementRef<'_>) -> String {
    join_stripped(element.text())
}

fn enclosing_block(anchor: ElementRef<'_>) -> Option<ElementRef<'_>> {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| BLOCK_CONTAINERS.contains(&el.value().name()))
}

fn at_least(text: String, min_chars: usize) -> Option<String> {
    (char_len(&text) >= min_chars).then_some(text)
}

fn anchor_text(candidate: &Candidate<'_>, config: &ScraperConfig) -> Option<String> {
    at_least(element_text(candidate.anchor), config.min_title_chars)
}

/// First heading-like element inside the container, replacing the anchor
/// text outright. The anchor text only stands in when there is no such
/// element.
fn fallback_title(candidate: &Candidate<'_>, config: &ScraperConfig) -> Option<String> {
    let heading = candidate
        .container
        .and_then(|container| container.select(&HEADING).next());
    let text = element_text(heading.unwrap_or(candidate.anchor));
    at_least(text, config.min_fallback_title_chars)
}

fn container_paragraph(candidate: &Candidate<'_>, config: &ScraperConfig) -> Option<String> {
    let paragraph = candidate.container?.select(&PARAGRAPH).next()?;
    let text = element_text(paragraph);
    Some(truncate_chars(&text, config.summary_chars).to_string())
}
