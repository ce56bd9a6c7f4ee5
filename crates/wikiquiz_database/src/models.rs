//! Diesel models for the `wiki_quizzes` table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wikiquiz_core::{NewQuiz, QuizRecord};
use wikiquiz_error::{DatabaseError, DatabaseResult};

/// Database row for the wiki_quizzes table.
///
/// JSONB columns are kept as raw values here and decoded into typed fields
/// when converting into a [`QuizRecord`].
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::wiki_quizzes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuizRow {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub summary: Option<String>,
    pub sections: Value,
    pub key_entities: Value,
    pub quiz: Value,
    pub related_topics: Value,
    pub raw_html: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for a new quiz.
///
/// Timestamps and id are assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::wiki_quizzes)]
pub struct NewQuizRow {
    pub url: String,
    pub title: String,
    pub summary: Option<String>,
    pub sections: Value,
    pub key_entities: Value,
    pub quiz: Value,
    pub related_topics: Value,
    pub raw_html: Option<String>,
}

impl TryFrom<&NewQuiz> for NewQuizRow {
    type Error = DatabaseError;

    fn try_from(new_quiz: &NewQuiz) -> DatabaseResult<Self> {
        Ok(Self {
            url: new_quiz.url.clone(),
            title: new_quiz.title.clone(),
            summary: new_quiz.summary.clone(),
            sections: serde_json::to_value(&new_quiz.sections)?,
            key_entities: serde_json::to_value(&new_quiz.key_entities)?,
            quiz: serde_json::to_value(&new_quiz.quiz)?,
            related_topics: serde_json::to_value(&new_quiz.related_topics)?,
            raw_html: new_quiz.raw_html.clone(),
        })
    }
}

impl TryFrom<QuizRow> for QuizRecord {
    type Error = DatabaseError;

    fn try_from(row: QuizRow) -> DatabaseResult<Self> {
        Ok(Self {
            id: row.id,
            url: row.url,
            title: row.title,
            summary: row.summary,
            sections: decode_json(row.sections)?,
            key_entities: decode_json(row.key_entities)?,
            quiz: decode_json(row.quiz)?,
            related_topics: decode_json(row.related_topics)?,
            raw_html: row.raw_html,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// JSON null reads back as an empty container.
fn decode_json<T: DeserializeOwned + Default>(value: Value) -> DatabaseResult<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value)?)
}
