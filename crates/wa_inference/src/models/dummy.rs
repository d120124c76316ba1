use std::fmt;

use wa_core::{Error, Result};

use super::InferenceModel;
use crate::GenerationOptions;

/// Offline stand-in for the completion service.
#[derive(Clone, Default)]
pub struct DummyModel {
    reply: Option<String>,
    fail: bool,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").field("fail", &self.fail).finish()
    }
}

impl DummyModel {
    /// Echoes the first 20 words of the prompt.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            fail: false,
        }
    }

    /// Every call errors, the way an unreachable service would.
    pub fn failing() -> Self {
        Self {
            reply: None,
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn complete(&self, prompt: &str, _options: &GenerationOptions) -> Result<String> {
        if self.fail {
            return Err(Error::Inference("dummy model configured to fail".to_string()));
        }
        if let Some(reply) = &self.reply {
            return Ok(reply.clone());
        }
        let words: Vec<&str> = prompt.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
