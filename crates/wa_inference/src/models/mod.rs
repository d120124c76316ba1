use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use wa_core::{Error, Result};

use crate::{GenerationOptions, InferenceConfig};

pub mod completions;
pub mod dummy;

pub use completions::CompletionsModel;
pub use dummy::DummyModel;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Sends one prompt and returns the generated text.
    async fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}

pub fn create_model(config: &InferenceConfig) -> Result<Arc<dyn InferenceModel>> {
    match config.backend.as_str() {
        "completions" => Ok(Arc::new(CompletionsModel::new(config)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Config(format!(
            "Unknown model backend: {}. Available: completions, dummy",
            other
        ))),
    }
}
