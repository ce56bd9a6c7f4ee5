//! Trait definitions for model backends and article sources.

use async_trait::async_trait;
use wikiquiz_core::{Article, GenerateRequest, GenerateResponse};
use wikiquiz_error::{ExtractResult, WikiQuizResult};

/// Core trait that every language model backend implements.
///
/// One call, one reply. Implementations do not retry or stream.
#[async_trait]
pub trait QuizDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> WikiQuizResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-3-flash-preview").
    fn model_name(&self) -> &str;
}

/// A source of article content keyed by URL.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch and extract the article at `url`.
    ///
    /// Implementations must reject unsupported URLs before touching the network.
    async fn extract(&self, url: &str) -> ExtractResult<Article>;
}
