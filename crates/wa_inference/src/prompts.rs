//! Prompt text for the two model calls, and lenient parsing of what comes back.

use wa_core::text::truncate_chars;
use wa_core::ExtractedFields;

/// How much converted article text the extraction prompt carries.
pub const EXTRACTION_INPUT_CHARS: usize = 5000;

pub fn extraction_prompt(markdown: &str) -> String {
    format!(
        r#"Extract the key information from the article below and answer with JSON only, in exactly this shape:
{{
    "title": "article title",
    "author": "author",
    "date": "publication date",
    "summary": "summary of the content, at most 200 words",
    "key_points": ["key point 1", "key point 2", "key point 3"],
    "tags": ["tag 1", "tag 2"]
}}

Article:
{}
"#,
        truncate_chars(markdown, EXTRACTION_INPUT_CHARS)
    )
}

/// `articles_json` is the pretty-printed article list; it is not truncated.
pub fn summary_prompt(articles_json: &str) -> String {
    format!(
        r#"Write a structured report based on the following list of articles:

{}

Organise it like this:
## Overview
- X articles found in total

## By topic
Group the articles by topic or keyword and list each title with its main points

## Recommended reading
Pick the 3 to 5 most valuable articles and explain why
"#,
        articles_json
    )
}

/// Pulls the first JSON object out of a model reply. Replies wrapped in code
/// fences or surrounded by prose are accepted; anything else yields `None`.
pub fn parse_extracted_fields(reply: &str) -> Option<ExtractedFields> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&reply[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_truncates_input() {
        let markdown = "x".repeat(EXTRACTION_INPUT_CHARS + 100);
        let prompt = extraction_prompt(&markdown);
        assert!(prompt.contains(&"x".repeat(EXTRACTION_INPUT_CHARS)));
        assert!(!prompt.contains(&"x".repeat(EXTRACTION_INPUT_CHARS + 1)));
        assert!(prompt.contains("\"key_points\""));
    }

    #[test]
    fn test_summary_prompt_embeds_articles() {
        let prompt = summary_prompt(r#"[{"title": "VR headset review"}]"#);
        assert!(prompt.contains("VR headset review"));
    }

    #[test]
    fn test_parse_fenced_reply() {
        let reply = "Sure, here it is:\n```json\n{\"title\": \"Quest 4\", \"author\": \"Li\", \"tags\": [\"vr\"]}\n```";
        let fields = parse_extracted_fields(reply).unwrap();
        assert_eq!(fields.title.as_deref(), Some("Quest 4"));
        assert_eq!(fields.author.as_deref(), Some("Li"));
        assert_eq!(fields.tags, vec!["vr".to_string()]);
        assert!(fields.key_points.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_extracted_fields("no structure here").is_none());
        assert!(parse_extracted_fields("} backwards {").is_none());
        assert!(parse_extracted_fields("{not json}").is_none());
    }
}
