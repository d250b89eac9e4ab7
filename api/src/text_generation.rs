//! Simulated text-generation client.

use serde::{Deserialize, Serialize};

use crate::config::{TextGenerationConfig, API_KEY_VAR};
use crate::error::{TextGenerationError, TextGenerationResult};
use crate::timing;

/// A completion returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub text: String,
    pub model: String,
}

#[derive(Debug, Clone, Default)]
pub struct TextGenerationClient {
    config: TextGenerationConfig,
}

impl TextGenerationClient {
    pub fn new(config: TextGenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TextGenerationConfig {
        &self.config
    }

    /// Whether a request could be issued (a credential is configured).
    pub fn is_available(&self) -> bool {
        self.config.has_credential()
    }

    /// Generate a completion for `prompt`.
    ///
    /// Validation happens before the simulated round trip, so a bad request
    /// fails immediately.
    pub async fn generate(&self, prompt: &str) -> TextGenerationResult<GeneratedText> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(TextGenerationError::EmptyPrompt);
        }
        if !self.config.has_credential() {
            tracing::warn!(var = API_KEY_VAR, "text-generation credential missing");
            return Err(TextGenerationError::MissingCredential { var: API_KEY_VAR });
        }

        tracing::debug!(
            model = self.config.model(),
            prompt_chars = prompt.chars().count(),
            "text-generation request"
        );
        timing::sleep_ms(self.config.latency_ms()).await;

        Ok(GeneratedText {
            text: format!("Simulated response to \"{prompt}\"."),
            model: self.config.model().to_string(),
        })
    }

    /// Generate completions one after another, preserving input order.
    pub async fn generate_batch<S: AsRef<str>>(
        &self,
        prompts: &[S],
    ) -> Vec<TextGenerationResult<GeneratedText>> {
        let mut results = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            results.push(self.generate(prompt.as_ref()).await);
        }
        results
    }
}
