use async_trait::async_trait;
use encoding_rs::{Encoding, GB18030, UTF_8};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::debug;
use wa_core::{Error, Result};

use crate::ScraperConfig;

lazy_static! {
    static ref META_CHARSET: Regex =
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([a-z0-9_:.\-]+)"#).unwrap();
}

const SNIFF_BYTES: usize = 2048;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the decoded body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain GET with a browser user agent and a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.fetch_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Scraping(format!("HTTP {} for {}", status, url)));
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;
        let html = decode_body(&bytes, content_type.as_deref());
        debug!("Fetched {} ({} chars)", url, html.chars().count());
        Ok(html)
    }
}

/// Decodes a page body using the `Content-Type` charset, then a `<meta>`
/// charset near the top of the document. Undeclared bodies are UTF-8, or
/// GB18030 when they are not valid UTF-8.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(bytes))
        .unwrap_or_else(|| {
            if std::str::from_utf8(bytes).is_ok() {
                UTF_8
            } else {
                GB18030
            }
        });
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!("Body is not clean {}, replacement characters inserted", used.name());
    }
    text.into_owned()
}

fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        Encoding::for_label(value.trim().trim_matches('"').as_bytes())
    })
}

fn meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_BYTES)]);
    let captures = META_CHARSET.captures(&head)?;
    Encoding::for_label(captures[1].as_bytes())
}
