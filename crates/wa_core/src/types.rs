use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A listing entry pulled from the source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ArticleDetail>,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            summary: summary.into(),
            detail: None,
        }
    }
}

/// What the detail page yielded. When the model call failed only
/// `raw_markdown` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_extracted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<ExtractedFields>,
    pub raw_markdown: String,
}

impl ArticleDetail {
    pub fn raw_only(url: impl Into<String>, raw_markdown: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            llm_extracted: None,
            fields: None,
            raw_markdown: raw_markdown.into(),
        }
    }

    pub fn has_model_output(&self) -> bool {
        self.llm_extracted.is_some()
    }
}

/// The JSON shape the extraction prompt asks the model for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, alias = "content_summary", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Keyword filter. `Any` is the wildcard and is written out as `[""]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keywords {
    Any,
    Terms(Vec<String>),
}

impl Keywords {
    /// Parses a comma separated list. Blank input yields the wildcard.
    pub fn parse(input: &str) -> Self {
        Self::from_terms(input.split(','))
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if terms.is_empty() {
            Keywords::Any
        } else {
            Keywords::Terms(terms)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Keywords::Any)
    }

    /// Case-insensitive containment of any term in `text`.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Keywords::Any => true,
            Keywords::Terms(terms) => {
                let haystack = text.to_lowercase();
                terms.iter().any(|t| haystack.contains(&t.to_lowercase()))
            }
        }
    }

    pub fn terms(&self) -> &[String] {
        match self {
            Keywords::Any => &[],
            Keywords::Terms(terms) => terms,
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords::Any
    }
}

impl fmt::Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keywords::Any => write!(f, "<any>"),
            Keywords::Terms(terms) => write!(f, "{}", terms.join(", ")),
        }
    }
}

impl Serialize for Keywords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Keywords::Any => [""].serialize(serializer),
            Keywords::Terms(terms) => terms.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Keywords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let terms = Vec::<String>::deserialize(deserializer)?;
        Ok(Keywords::from_terms(terms))
    }
}

/// Everything one run produced; this is what lands in the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub source_url: String,
    pub keywords: Keywords,
    pub articles: Vec<Article>,
    pub total: usize,
    pub extracted_at: DateTime<Utc>,
}

impl ExtractionResult {
    pub fn new(source_url: impl Into<String>, keywords: Keywords, articles: Vec<Article>) -> Self {
        let total = articles.len();
        Self {
            source_url: source_url.into(),
            keywords,
            articles,
            total,
            extracted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keywords_parse() {
        assert_eq!(Keywords::parse(""), Keywords::Any);
        assert_eq!(Keywords::parse(" , ,"), Keywords::Any);
        assert_eq!(
            Keywords::parse("AI, vr ,,headset"),
            Keywords::Terms(vec!["AI".into(), "vr".into(), "headset".into()])
        );
    }

    #[test]
    fn test_keywords_match_case_insensitive() {
        let keywords = Keywords::parse("ai");
        assert!(keywords.matches("New AI chip announced"));
        assert!(!keywords.matches("Weather report"));
        assert!(Keywords::Any.matches(""));
    }

    #[test]
    fn test_keywords_serialization() {
        assert_eq!(serde_json::to_value(Keywords::Any).unwrap(), json!([""]));
        assert_eq!(
            serde_json::to_value(Keywords::parse("ai,vr")).unwrap(),
            json!(["ai", "vr"])
        );
        let parsed: Keywords = serde_json::from_value(json!([""])).unwrap();
        assert!(parsed.is_wildcard());
    }

    #[test]
    fn test_article_without_detail_omits_field() {
        let article = Article::new("A long enough title", "https://example.com/1.html", "");
        let value = serde_json::to_value(&article).unwrap();
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_raw_only_detail_shape() {
        let detail = ArticleDetail::raw_only("https://example.com/1.html", "body");
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value, json!({"url": "https://example.com/1.html", "raw_markdown": "body"}));
        assert!(!detail.has_model_output());
    }

    #[test]
    fn test_result_total_matches_articles() {
        let articles = vec![
            Article::new("First article title", "https://example.com/1.html", ""),
            Article::new("Second article title", "https://example.com/2.html", ""),
        ];
        let result = ExtractionResult::new("https://example.com", Keywords::Any, articles);
        assert_eq!(result.total, result.articles.len());
    }

    #[test]
    fn test_extracted_fields_accepts_content_summary() {
        let fields: ExtractedFields = serde_json::from_value(json!({
            "title": "t",
            "content_summary": "s",
            "key_points": ["a"]
        }))
        .unwrap();
        assert_eq!(fields.summary.as_deref(), Some("s"));
        assert!(fields.tags.is_empty());
    }
}
