//! Test utilities for server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;
use wikiquiz_core::{Article, GenerateRequest, GenerateResponse};
use wikiquiz_database::InMemoryQuizRepository;
use wikiquiz_error::{ExtractError, ExtractErrorKind, ExtractResult, WikiQuizResult};
use wikiquiz_extract::is_article_url;
use wikiquiz_interface::{ArticleSource, QuizDriver};
use wikiquiz_server::{AppState, QuizService};
use wikiquiz_synthesis::PayloadSynthesizer;

pub const TURING_URL: &str = "https://en.wikipedia.org/wiki/Alan_Turing";
pub const LOVELACE_URL: &str = "https://en.wikipedia.org/wiki/Ada_Lovelace";

/// A well-formed payload wrapped in the chatter models like to add.
pub const VALID_REPLY: &str = r#"Here is your quiz:
```json
{
  "key_entities": {"people": ["Alan Turing"], "organizations": ["Bletchley Park"], "locations": ["London"]},
  "quiz": [
    {
      "question": "Where did Turing work during the Second World War?",
      "options": ["Bletchley Park", "Harvard", "CERN", "Bell Labs"],
      "answer": "Bletchley Park",
      "difficulty": "easy",
      "explanation": "He led codebreaking work at Bletchley Park."
    }
  ],
  "related_topics": ["Enigma machine", "Turing test"]
}
```"#;

/// Valid questions with the other two keys set to `null`.
pub const NULL_FIELDS_REPLY: &str = r#"{
  "key_entities": null,
  "quiz": [
    {
      "question": "What did Turing propose in 1950?",
      "options": ["The imitation game", "The halting problem", "Lambda calculus", "Enigma"],
      "answer": "The imitation game",
      "difficulty": "medium",
      "explanation": "Computing Machinery and Intelligence introduced the imitation game."
    }
  ],
  "related_topics": null
}"#;

/// Object with every key present but a question carrying three options.
pub const THREE_OPTION_REPLY: &str = r#"{
  "key_entities": {"people": [], "organizations": [], "locations": []},
  "quiz": [
    {
      "question": "Which?",
      "options": ["a", "b", "c"],
      "answer": "a",
      "difficulty": "easy",
      "explanation": "Because."
    }
  ],
  "related_topics": []
}"#;

/// Article source that serves a canned article and counts calls.
///
/// Non-article URLs are rejected the way the real extractor rejects them.
/// With a barrier, every call waits until the barrier's party count has
/// arrived, which forces overlapping requests.
pub struct StubSource {
    calls: Mutex<usize>,
    barrier: Option<Arc<Barrier>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(0),
            barrier: None,
        }
    }

    pub fn with_barrier(parties: usize) -> Self {
        Self {
            calls: Mutex::new(0),
            barrier: Some(Arc::new(Barrier::new(parties))),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ArticleSource for StubSource {
    async fn extract(&self, url: &str) -> ExtractResult<Article> {
        *self.calls.lock().unwrap() += 1;

        if !is_article_url(url) {
            return Err(ExtractError::new(ExtractErrorKind::InvalidSource(
                url.to_string(),
            )));
        }
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let slug = url.rsplit('/').next().unwrap_or_default();
        Ok(Article {
            url: url.to_string(),
            title: slug.replace('_', " "),
            summary: Some(format!("{} was a mathematician.", slug.replace('_', " "))),
            sections: vec!["Early life".to_string(), "Legacy".to_string()],
            full_text: "Paragraph one.\nParagraph two.".to_string(),
            raw_html: "<html><body>stub</body></html>".to_string(),
        })
    }
}

/// Model driver that always replies with the same text and counts calls.
pub struct StubDriver {
    reply: String,
    calls: Mutex<usize>,
}

impl StubDriver {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl QuizDriver for StubDriver {
    async fn generate(&self, _req: &GenerateRequest) -> WikiQuizResult<GenerateResponse> {
        *self.calls.lock().unwrap() += 1;
        Ok(GenerateResponse::from_text(self.reply.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// A service over in-memory stand-ins, with handles to inspect them.
pub struct Harness {
    pub service: QuizService,
    pub repository: Arc<InMemoryQuizRepository>,
    pub source: Arc<StubSource>,
    pub driver: Arc<StubDriver>,
}

impl Harness {
    pub fn new(reply: &str) -> Self {
        Self::with_source(StubSource::new(), reply)
    }

    pub fn with_source(source: StubSource, reply: &str) -> Self {
        let repository = Arc::new(InMemoryQuizRepository::new());
        let source = Arc::new(source);
        let driver = Arc::new(StubDriver::new(reply));
        let service = QuizService::new(
            repository.clone(),
            source.clone(),
            PayloadSynthesizer::new(driver.clone()),
        );

        Self {
            service,
            repository,
            source,
            driver,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.service.clone())
    }
}
