use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wa_core::{Error, Result};

use super::InferenceModel;
use crate::{GenerationOptions, InferenceConfig};

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    text: Option<String>,
}

/// Client for an OpenAI-style `/v1/completions` endpoint.
pub struct CompletionsModel {
    client: Client,
    api_url: Url,
    model_name: String,
    api_token: Option<String>,
}

impl CompletionsModel {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        Ok(Self {
            client: Client::new(),
            api_url,
            model_name: config.model_name.clone(),
            api_token: config.api_token.clone(),
        })
    }
}

impl fmt::Debug for CompletionsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionsModel")
            .field("client", &"<reqwest::Client>")
            .field("api_url", &self.api_url.as_str())
            .field("model_name", &self.model_name)
            .field("api_token", &self.api_token.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl InferenceModel for CompletionsModel {
    fn name(&self) -> &str {
        "completions"
    }

    async fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model_name,
            prompt,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        debug!(
            "Requesting completion from {} ({} prompt chars, max_tokens {})",
            self.api_url,
            prompt.chars().count(),
            options.max_tokens
        );
        let mut builder = self
            .client
            .post(self.api_url.clone())
            .timeout(options.timeout)
            .json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Inference(format!(
                "{} returned status {}",
                self.api_url, status
            )));
        }

        let body = response.json::<CompletionResponse>().await?;
        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.text)
            .unwrap_or_default())
    }
}
