//! Model-backed payload synthesizer.

use crate::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::recover::recover_json_object;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument};
use wikiquiz_core::{Article, GenerateRequest, Message};
use wikiquiz_error::{SynthesisError, SynthesisErrorKind, SynthesisResult};
use wikiquiz_interface::QuizDriver;

/// Sampling temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Prompts a language model for a quiz payload and recovers its JSON.
///
/// The driver is supplied by the caller, so tests can substitute a stub that
/// returns canned text.
#[derive(Clone)]
pub struct PayloadSynthesizer {
    driver: Arc<dyn QuizDriver>,
    temperature: f32,
}

impl std::fmt::Debug for PayloadSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadSynthesizer")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl PayloadSynthesizer {
    /// Create a synthesizer over `driver` at the default temperature.
    pub fn new(driver: Arc<dyn QuizDriver>) -> Self {
        Self {
            driver,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Build the two-message request for an article.
    pub fn build_request(&self, article: &Article) -> SynthesisResult<GenerateRequest> {
        GenerateRequest::builder()
            .messages(vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(user_prompt(article)),
            ])
            .temperature(self.temperature)
            .build()
            .map_err(|e| SynthesisError::generation(format!("failed to build request: {}", e)))
    }

    /// Produce the quiz payload object for an article.
    ///
    /// Calls the driver exactly once.
    ///
    /// # Errors
    ///
    /// Returns `Driver` if the model call fails, or `Generation` if the reply
    /// holds no usable JSON object.
    #[instrument(
        skip(self, article),
        fields(title = %article.title, model = self.driver.model_name())
    )]
    pub async fn synthesize(&self, article: &Article) -> SynthesisResult<Value> {
        let request = self.build_request(article)?;
        let prompt_len: usize = request.messages.iter().map(|m| m.content.len()).sum();

        let response = self.driver.generate(&request).await.map_err(|e| {
            error!(error = %e, "Model call failed");
            SynthesisError::new(SynthesisErrorKind::Driver(e.condition()))
        })?;

        let raw = response.text();
        info!(prompt_len, response_len = raw.len(), "Model replied");

        recover_json_object(raw)
    }
}
