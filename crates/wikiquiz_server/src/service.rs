//! Quiz generation workflow.

use crate::{ApiError, ApiResult};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use wikiquiz_core::{NewQuiz, QuizContent, QuizListItem, QuizPayload, QuizRecord};
use wikiquiz_interface::{ArticleSource, QuizRepository};
use wikiquiz_synthesis::PayloadSynthesizer;

/// Listing page size used when the caller gives none.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Turns article URLs into stored quizzes and serves stored quizzes back.
///
/// A generate request moves through these stages, stopping at the first
/// failure:
///
/// 1. cache check by URL (a hit returns the stored quiz untouched)
/// 2. article extraction
/// 3. payload synthesis
/// 4. schema validation of the payload
/// 5. storage, where losing a race on the URL returns the winner's record
///
/// Nothing is written unless every earlier stage succeeded.
#[derive(Clone)]
pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    source: Arc<dyn ArticleSource>,
    synthesizer: PayloadSynthesizer,
}

impl std::fmt::Debug for QuizService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizService")
            .field("synthesizer", &self.synthesizer)
            .finish_non_exhaustive()
    }
}

impl QuizService {
    /// Assemble a service from its three collaborators.
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        source: Arc<dyn ArticleSource>,
        synthesizer: PayloadSynthesizer,
    ) -> Self {
        Self {
            repository,
            source,
            synthesizer,
        }
    }

    /// Return the quiz for `url`, generating and storing it on first request.
    ///
    /// # Errors
    ///
    /// - 400 `Scraping failed: ...` when the URL is not an article or cannot be fetched
    /// - 500 `LLM generation failed: ...` when the model reply is unusable
    /// - 500 on storage failures
    #[instrument(skip(self))]
    pub async fn generate(&self, url: &str) -> ApiResult<QuizPayload> {
        if let Some(record) = self.lookup_url(url).await? {
            info!(id = record.id, "Serving cached quiz");
            return Ok(record.into());
        }

        let article = self.source.extract(url).await.map_err(|e| {
            warn!(error = %e, "Extraction failed");
            ApiError::bad_request(format!("Scraping failed: {}", e.kind))
        })?;

        let payload = self.synthesizer.synthesize(&article).await.map_err(|e| {
            error!(error = %e, "Synthesis failed");
            ApiError::internal(format!("LLM generation failed: {}", e.kind))
        })?;

        let content = QuizContent::from_value(payload).map_err(|e| {
            error!(error = %e, "Generated payload failed validation");
            ApiError::internal(format!("LLM generation failed: {}", e.message))
        })?;

        match self
            .repository
            .create(NewQuiz::from_parts(article, content))
            .await
        {
            Ok(record) => {
                info!(id = record.id, questions = record.quiz.len(), "Generated quiz");
                Ok(record.into())
            }
            Err(e) if e.is_duplicate_url() => {
                warn!("Lost insert race, returning stored quiz");
                self.lookup_url(url)
                    .await?
                    .map(QuizPayload::from)
                    .ok_or_else(|| ApiError::internal("DB insert failed (duplicate URL)"))
            }
            Err(e) => {
                error!(error = %e, "Insert failed");
                Err(ApiError::internal(format!("DB insert failed: {}", e.kind)))
            }
        }
    }

    /// List stored quizzes, newest first.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> ApiResult<Vec<QuizListItem>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let offset = offset.unwrap_or(0);

        let records = self
            .repository
            .list_recent(limit, offset)
            .await
            .map_err(|e| {
                error!(error = %e, "Listing failed");
                ApiError::internal(format!("DB query failed: {}", e.kind))
            })?;

        Ok(records.into_iter().map(QuizListItem::from).collect())
    }

    /// Fetch one stored quiz by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> ApiResult<QuizPayload> {
        let record = self.repository.find_by_id(id).await.map_err(|e| {
            error!(error = %e, "Lookup by id failed");
            ApiError::internal(format!("DB query failed: {}", e.kind))
        })?;

        record
            .map(QuizPayload::from)
            .ok_or_else(|| ApiError::not_found("Quiz not found"))
    }

    async fn lookup_url(&self, url: &str) -> ApiResult<Option<QuizRecord>> {
        self.repository.find_by_url(url).await.map_err(|e| {
            error!(error = %e, "Lookup by URL failed");
            ApiError::internal(format!("DB query failed: {}", e.kind))
        })
    }
}
