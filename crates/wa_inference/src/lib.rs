use std::time::Duration;

pub mod models;
pub mod prompts;

pub use models::{create_model, InferenceModel};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/v1/completions";
pub const DEFAULT_MODEL_NAME: &str = "glm-4.7";

/// Where the completion service lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Which backend `create_model` builds: `completions` or `dummy`.
    pub backend: String,
    pub api_url: String,
    pub model_name: String,
    pub api_token: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backend: "completions".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            api_token: None,
        }
    }
}

/// Per-call sampling and deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl GenerationOptions {
    /// Settings for the per-article field extraction.
    pub fn extraction() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.3,
            timeout: Duration::from_secs(30),
        }
    }

    /// Settings for the overall report summary.
    pub fn summary() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.5,
            timeout: Duration::from_secs(60),
        }
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::{GenerationOptions, InferenceConfig, InferenceModel};
    pub use wa_core::{Error, Result};
}
