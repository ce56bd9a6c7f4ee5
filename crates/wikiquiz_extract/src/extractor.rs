//! HTTP-backed article source.

use crate::parse::{is_article_url, parse_article};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use wikiquiz_core::Article;
use wikiquiz_error::{ExtractError, ExtractErrorKind, ExtractResult};
use wikiquiz_interface::ArticleSource;

/// User-Agent sent with every article request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; WikiQuizBot/1.0; +https://example.com/bot)";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Settings for the outbound HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fetches Wikipedia article pages and extracts their text.
#[derive(Debug, Clone)]
pub struct WikipediaExtractor {
    client: reqwest::Client,
}

impl WikipediaExtractor {
    /// Create an extractor with the default timeout and User-Agent.
    pub fn new() -> ExtractResult<Self> {
        Self::with_config(&ExtractorConfig::default())
    }

    /// Create an extractor with explicit HTTP settings.
    pub fn with_config(config: &ExtractorConfig) -> ExtractResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ExtractError::new(ExtractErrorKind::Client(e.to_string())))?;

        Ok(Self { client })
    }

    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> ExtractResult<String> {
        let fetch_error =
            |e: reqwest::Error| ExtractError::new(ExtractErrorKind::Fetch(e.to_string()));

        let response = self.client.get(url).send().await.map_err(fetch_error)?;
        let status = response.status();
        debug!(%status, "Article response received");

        let response = response.error_for_status().map_err(fetch_error)?;
        response.text().await.map_err(fetch_error)
    }
}

#[async_trait]
impl ArticleSource for WikipediaExtractor {
    #[instrument(skip(self))]
    async fn extract(&self, url: &str) -> ExtractResult<Article> {
        if !is_article_url(url) {
            warn!("Rejected non-article URL");
            return Err(ExtractError::new(ExtractErrorKind::InvalidSource(
                url.to_string(),
            )));
        }

        let html = self.fetch(url).await?;
        let article = parse_article(url, &html)?;

        info!(
            title = %article.title,
            sections = article.sections.len(),
            "Extracted article"
        );
        Ok(article)
    }
}
