//! Persisted quiz records and their API projections.

use crate::{Article, KeyEntities, QuizContent, QuizQuestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored quiz, one per source URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    /// Storage-assigned identifier
    pub id: i32,
    /// Source article URL (unique)
    pub url: String,
    /// Article title
    pub title: String,
    /// Article summary
    pub summary: Option<String>,
    /// Article section headings
    pub sections: Vec<String>,
    /// Entities found by the model
    pub key_entities: KeyEntities,
    /// Generated questions
    pub quiz: Vec<QuizQuestion>,
    /// Suggested follow-up topics
    pub related_topics: Vec<String>,
    /// Page markup kept for audit; never served
    pub raw_html: Option<String>,
    /// When the record was inserted
    pub created_at: DateTime<Utc>,
    /// When the record was last touched
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a [`QuizRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuiz {
    /// Source article URL
    pub url: String,
    /// Article title
    pub title: String,
    /// Article summary
    pub summary: Option<String>,
    /// Article section headings
    pub sections: Vec<String>,
    /// Entities found by the model
    pub key_entities: KeyEntities,
    /// Generated questions
    pub quiz: Vec<QuizQuestion>,
    /// Suggested follow-up topics
    pub related_topics: Vec<String>,
    /// Page markup kept for audit
    pub raw_html: Option<String>,
}

impl NewQuiz {
    /// Combine an extracted article with its validated generated content.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikiquiz_core::{Article, NewQuiz, QuizContent};
    ///
    /// let article = Article {
    ///     url: "https://en.wikipedia.org/wiki/Ada_Lovelace".to_string(),
    ///     title: "Ada Lovelace".to_string(),
    ///     summary: None,
    ///     sections: vec![],
    ///     full_text: String::new(),
    ///     raw_html: "<html></html>".to_string(),
    /// };
    ///
    /// let new_quiz = NewQuiz::from_parts(article, QuizContent::default());
    /// assert_eq!(new_quiz.title, "Ada Lovelace");
    /// assert_eq!(new_quiz.raw_html.as_deref(), Some("<html></html>"));
    /// ```
    pub fn from_parts(article: Article, content: QuizContent) -> Self {
        Self {
            url: article.url,
            title: article.title,
            summary: article.summary,
            sections: article.sections,
            key_entities: content.key_entities,
            quiz: content.quiz,
            related_topics: content.related_topics,
            raw_html: Some(article.raw_html),
        }
    }
}

/// Full quiz as returned by the HTTP API.
///
/// Identical to [`QuizRecord`] minus the stored page markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizPayload {
    /// Storage-assigned identifier
    pub id: i32,
    /// Source article URL
    pub url: String,
    /// Article title
    pub title: String,
    /// Article summary
    pub summary: Option<String>,
    /// Entities found by the model
    pub key_entities: KeyEntities,
    /// Article section headings
    pub sections: Vec<String>,
    /// Generated questions
    pub quiz: Vec<QuizQuestion>,
    /// Suggested follow-up topics
    pub related_topics: Vec<String>,
    /// When the record was inserted
    pub created_at: DateTime<Utc>,
    /// When the record was last touched
    pub updated_at: DateTime<Utc>,
}

impl From<QuizRecord> for QuizPayload {
    fn from(record: QuizRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            title: record.title,
            summary: record.summary,
            key_entities: record.key_entities,
            sections: record.sections,
            quiz: record.quiz,
            related_topics: record.related_topics,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Summary row for quiz listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizListItem {
    /// Storage-assigned identifier
    pub id: i32,
    /// Source article URL
    pub url: String,
    /// Article title
    pub title: String,
    /// When the record was inserted
    pub created_at: DateTime<Utc>,
}

impl From<QuizRecord> for QuizListItem {
    fn from(record: QuizRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            title: record.title,
            created_at: record.created_at,
        }
    }
}
