//! PostgreSQL-backed quiz repository.

use crate::{DbPool, NewQuizRow, QuizRow, schema::wiki_quizzes};
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::{debug, info, instrument, warn};
use wikiquiz_core::{NewQuiz, QuizRecord};
use wikiquiz_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use wikiquiz_interface::QuizRepository;

/// PostgreSQL implementation of [`QuizRepository`].
///
/// Every operation checks a connection out of the pool inside
/// `spawn_blocking`; the connection goes back to the pool when the closure
/// returns, on success and failure alike.
#[derive(Debug, Clone)]
pub struct PostgresQuizRepository {
    pool: DbPool,
}

impl PostgresQuizRepository {
    /// Create a repository over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a blocking diesel closure on a pooled connection.
    async fn with_conn<T, F>(&self, f: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || -> DatabaseResult<T> {
            let mut conn = pool.get()?;
            f(&mut *conn)
        })
        .await
        .map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Query(format!("Task join error: {}", e)))
        })?
    }
}

#[async_trait]
impl QuizRepository for PostgresQuizRepository {
    #[instrument(skip(self))]
    async fn find_by_url(&self, url: &str) -> DatabaseResult<Option<QuizRecord>> {
        let url = url.to_string();

        let row = self
            .with_conn(move |conn| {
                Ok(wiki_quizzes::table
                    .filter(wiki_quizzes::url.eq(&url))
                    .select(QuizRow::as_select())
                    .first(conn)
                    .optional()?)
            })
            .await?;

        debug!(hit = row.is_some(), "Looked up quiz by URL");
        row.map(QuizRecord::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<QuizRecord>> {
        let row = self
            .with_conn(move |conn| {
                Ok(wiki_quizzes::table
                    .find(id)
                    .select(QuizRow::as_select())
                    .first(conn)
                    .optional()?)
            })
            .await?;

        row.map(QuizRecord::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64, offset: i64) -> DatabaseResult<Vec<QuizRecord>> {
        let rows = self
            .with_conn(move |conn| {
                Ok(wiki_quizzes::table
                    .order((wiki_quizzes::created_at.desc(), wiki_quizzes::id.desc()))
                    .limit(limit)
                    .offset(offset)
                    .select(QuizRow::as_select())
                    .load(conn)?)
            })
            .await?;

        debug!(count = rows.len(), "Listed quizzes");
        rows.into_iter().map(QuizRecord::try_from).collect()
    }

    #[instrument(skip(self, new_quiz), fields(url = %new_quiz.url))]
    async fn create(&self, new_quiz: NewQuiz) -> DatabaseResult<QuizRecord> {
        let new_row = NewQuizRow::try_from(&new_quiz)?;

        let result = self
            .with_conn(move |conn| {
                Ok(diesel::insert_into(wiki_quizzes::table)
                    .values(&new_row)
                    .returning(QuizRow::as_returning())
                    .get_result(conn)?)
            })
            .await;

        match result {
            Ok(row) => {
                info!(id = row.id, "Stored quiz");
                QuizRecord::try_from(row)
            }
            Err(e) => {
                if e.is_duplicate_url() {
                    warn!("Quiz for URL already exists");
                }
                Err(e)
            }
        }
    }
}
