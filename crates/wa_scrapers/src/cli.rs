use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use url::Url;
use wa_core::{Error, Keywords, Result};
use wa_inference::InferenceModel;

use crate::fetch::HttpFetcher;
use crate::manager::ExtractionManager;
use crate::ScraperConfig;

pub const DEFAULT_OUTPUT: &str = "articles.json";

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Listing page to scan. Prompted for when omitted.
    #[arg(long)]
    pub url: Option<String>,
    /// Comma separated keywords; empty matches everything. Prompted for when omitted.
    #[arg(long)]
    pub keywords: Option<String>,
    /// Where to write the JSON result. Prompted for when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Resolve relative links against this URL instead of the listing page.
    #[arg(long)]
    pub base_url: Option<Url>,
    /// How many articles get their detail page fetched.
    #[arg(long, default_value_t = 10)]
    pub detail_limit: usize,
    /// Skip the overall model summary.
    #[arg(long)]
    pub no_summary: bool,
    /// Never prompt; missing values fall back to their defaults.
    #[arg(long)]
    pub non_interactive: bool,
}

impl ExtractArgs {
    pub fn scraper_config(&self) -> ScraperConfig {
        ScraperConfig {
            base_url: self.base_url.clone(),
            detail_limit: self.detail_limit,
            summarize: !self.no_summary,
            ..ScraperConfig::default()
        }
    }
}

/// The three answers the extractor needs before it can start.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRequest {
    pub url: String,
    pub keywords: Keywords,
    pub output: PathBuf,
}

impl ExtractRequest {
    pub fn from_answers(url: &str, keywords: &str, output: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::Config("URL cannot be empty".to_string()));
        }
        let output = match output.trim() {
            "" => DEFAULT_OUTPUT,
            other => other,
        };
        Ok(Self {
            url: url.to_string(),
            keywords: Keywords::parse(keywords),
            output: PathBuf::from(output),
        })
    }
}

fn ask(prompt: &str, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input.interact_text().map_err(|e| Error::External(e.into()))
}

fn resolve_request(args: &ExtractArgs) -> Result<ExtractRequest> {
    let answer = |given: Option<String>, prompt: &str, default: Option<&str>| -> Result<String> {
        match given {
            Some(value) => Ok(value),
            None if args.non_interactive => Ok(default.unwrap_or_default().to_string()),
            None => ask(prompt, default),
        }
    };

    let url = answer(args.url.clone(), "Enter URL", None)?;
    let keywords = answer(args.keywords.clone(), "Keywords (comma-separated)", None)?;
    let output = answer(
        args.output.as_ref().map(|p| p.display().to_string()),
        "Output filename",
        Some(DEFAULT_OUTPUT),
    )?;
    ExtractRequest::from_answers(&url, &keywords, &output)
}

pub async fn handle_command(args: ExtractArgs, inference: Arc<dyn InferenceModel>) -> Result<()> {
    println!("Web Article Extractor");
    println!("{}", "=".repeat(50));

    let request = resolve_request(&args)?;
    let config = args.scraper_config();
    let fetcher = Arc::new(HttpFetcher::new(&config)?);
    let manager = ExtractionManager::new(fetcher, inference, config);

    let result = manager.run(&request.url, request.keywords).await?;
    println!("Found {} articles", result.total);

    let summary = manager.report(&result, &request.output).await?;
    println!("Saved to: {}", request.output.display());

    if let Some(summary) = summary {
        println!("Summary saved to: {}", summary.path.display());
        println!("\n{}", "=".repeat(50));
        println!("{}", summary.text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        extract: ExtractArgs,
    }

    #[test]
    fn test_from_answers() {
        let request = ExtractRequest::from_answers(" https://example.com ", "ai, vr", "").unwrap();
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.keywords, Keywords::Terms(vec!["ai".into(), "vr".into()]));
        assert_eq!(request.output, PathBuf::from("articles.json"));

        let request = ExtractRequest::from_answers("https://example.com", "  ", "out.json").unwrap();
        assert!(request.keywords.is_wildcard());
        assert_eq!(request.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = ExtractRequest::from_answers("   ", "", "").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: URL cannot be empty");
    }

    #[test]
    fn test_non_interactive_defaults() {
        let cli = TestCli::parse_from(["wa", "--url", "https://example.com/list", "--non-interactive"]);
        let request = resolve_request(&cli.extract).unwrap();
        assert!(request.keywords.is_wildcard());
        assert_eq!(request.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_args_to_config() {
        let cli = TestCli::parse_from([
            "wa",
            "--base-url",
            "https://www.example.com",
            "--detail-limit",
            "3",
            "--no-summary",
        ]);
        let config = cli.extract.scraper_config();
        assert_eq!(config.detail_limit, 3);
        assert!(!config.summarize);
        assert_eq!(config.base_url.unwrap().as_str(), "https://www.example.com/");
        assert_eq!(config.max_anchors, 150);
    }
}
