//! Test utilities for synthesis tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wikiquiz_core::{Article, GenerateRequest, GenerateResponse};
use wikiquiz_error::{GeminiError, GeminiErrorKind, WikiQuizResult};
use wikiquiz_interface::QuizDriver;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
}

/// Mock model driver that records what it was asked.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerateRequest>>>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request passed to generate().
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> WikiQuizResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(req.clone());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::from_text(text.clone())),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A small article fixture.
pub fn sample_article() -> Article {
    Article {
        url: "https://en.wikipedia.org/wiki/Marie_Curie".to_string(),
        title: "Marie Curie".to_string(),
        summary: Some("Marie Curie was a physicist and chemist.".to_string()),
        sections: vec!["Early life".to_string(), "Scientific work".to_string()],
        full_text: "Marie Curie was a physicist and chemist.\nShe won two Nobel Prizes."
            .to_string(),
        raw_html: "<html></html>".to_string(),
    }
}

/// A well-formed payload as the model would return it.
pub const VALID_PAYLOAD: &str = r#"{
  "key_entities": {"people": ["Marie Curie", "Pierre Curie"], "organizations": ["University of Paris"], "locations": ["Warsaw"]},
  "quiz": [
    {
      "question": "How many Nobel Prizes did Marie Curie win?",
      "options": ["One", "Two", "Three", "None"],
      "answer": "Two",
      "difficulty": "easy",
      "explanation": "She won the Nobel Prize in Physics and in Chemistry."
    }
  ],
  "related_topics": ["Radioactivity", "Polonium", "Radium", "Pierre Curie", "Nobel Prize"]
}"#;
