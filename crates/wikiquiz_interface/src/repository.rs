//! Repository trait for quiz persistence.

use async_trait::async_trait;
use wikiquiz_core::{NewQuiz, QuizRecord};
use wikiquiz_error::DatabaseResult;

/// Storage for quiz records, keyed uniquely by source URL.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Look up the record for a source URL.
    ///
    /// # Returns
    /// Some(QuizRecord) if one exists, None otherwise
    async fn find_by_url(&self, url: &str) -> DatabaseResult<Option<QuizRecord>>;

    /// Look up a record by its identifier.
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<QuizRecord>>;

    /// List records newest first.
    ///
    /// Ordered by `created_at` descending, ties broken by `id` descending.
    /// An offset past the end yields an empty vector.
    async fn list_recent(&self, limit: i64, offset: i64) -> DatabaseResult<Vec<QuizRecord>>;

    /// Insert a new record and return it with identifier and timestamps filled in.
    ///
    /// # Errors
    /// Returns a `DuplicateUrl` error if a record for the URL already exists.
    async fn create(&self, new_quiz: NewQuiz) -> DatabaseResult<QuizRecord>;
}
