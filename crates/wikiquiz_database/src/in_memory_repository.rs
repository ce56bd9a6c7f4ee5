//! In-memory implementation of QuizRepository.
//!
//! Keeps records in a HashMap behind an RwLock. Useful for tests and for
//! exercising the HTTP service without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use wikiquiz_core::{NewQuiz, QuizRecord};
use wikiquiz_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use wikiquiz_interface::QuizRepository;

/// In-memory quiz repository.
///
/// URL uniqueness is checked and the record inserted under a single write
/// lock, so concurrent creates for one URL behave like the database
/// constraint: exactly one succeeds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    records: HashMap<i32, QuizRecord>,
    last_id: i32,
}

impl InMemoryQuizRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Whether the repository holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_url(&self, url: &str) -> DatabaseResult<Option<QuizRecord>> {
        let store = self.inner.read().await;
        Ok(store.records.values().find(|r| r.url == url).cloned())
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<QuizRecord>> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn list_recent(&self, limit: i64, offset: i64) -> DatabaseResult<Vec<QuizRecord>> {
        let store = self.inner.read().await;
        let mut records: Vec<&QuizRecord> = store.records.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(records
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn create(&self, new_quiz: NewQuiz) -> DatabaseResult<QuizRecord> {
        let mut store = self.inner.write().await;

        if store.records.values().any(|r| r.url == new_quiz.url) {
            return Err(DatabaseError::new(DatabaseErrorKind::DuplicateUrl(
                new_quiz.url,
            )));
        }

        store.last_id += 1;
        let now = Utc::now();
        let record = QuizRecord {
            id: store.last_id,
            url: new_quiz.url,
            title: new_quiz.title,
            summary: new_quiz.summary,
            sections: new_quiz.sections,
            key_entities: new_quiz.key_entities,
            quiz: new_quiz.quiz,
            related_topics: new_quiz.related_topics,
            raw_html: new_quiz.raw_html,
            created_at: now,
            updated_at: now,
        };
        store.records.insert(record.id, record.clone());

        Ok(record)
    }
}
