use wa_core::{Error, Result};

/// Line width for the rendered text.
const TEXT_WIDTH: usize = 80;

/// Renders an HTML page as readable plain text, keeping link targets.
pub fn html_to_markdown(html: &str) -> Result<String> {
    html2text::from_read(html.as_bytes(), TEXT_WIDTH)
        .map_err(|e| Error::Scraping(format!("Failed to convert HTML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_markdown() {
        let html = r#"<html><body><h1>Quest 4 review</h1><p>Lighter and <a href="https://example.com/specs">sharper</a>.</p></body></html>"#;
        let text = html_to_markdown(html).unwrap();
        assert!(text.contains("Quest 4 review"));
        assert!(text.contains("sharper"));
        assert!(text.contains("https://example.com/specs"));
        assert!(!text.contains("<p>"));
    }
}
