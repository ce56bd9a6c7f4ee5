//! Quiz schema types.

use serde::{Deserialize, Deserializer, Serialize};
use wikiquiz_error::ValidationError;

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// How hard a question is meant to be.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Recall of a fact stated plainly in the article
    #[display("easy")]
    Easy,
    /// Requires connecting two facts
    #[display("medium")]
    Medium,
    /// Requires close reading
    #[display("hard")]
    Hard,
}

/// One multiple-choice question.
///
/// # Examples
///
/// ```
/// use wikiquiz_core::{Difficulty, QuizQuestion};
///
/// let question = QuizQuestion {
///     question: "Who designed Rust?".to_string(),
///     options: vec!["Graydon Hoare".into(), "Guido van Rossum".into(), "Bjarne Stroustrup".into(), "Rob Pike".into()],
///     answer: "Graydon Hoare".to_string(),
///     difficulty: Difficulty::Easy,
///     explanation: "Rust began as a personal project of Graydon Hoare.".to_string(),
/// };
///
/// assert!(question.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text
    pub question: String,
    /// Exactly four answer options
    pub options: Vec<String>,
    /// The correct option, verbatim
    pub answer: String,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Short justification grounded in the article
    pub explanation: String,
}

impl QuizQuestion {
    /// Check the option count and that the answer is one of the options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(ValidationError::new(format!(
                "question {:?} has {} options, expected {}",
                self.question,
                self.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        if !self.options.iter().any(|option| option == &self.answer) {
            return Err(ValidationError::new(format!(
                "answer {:?} to question {:?} is not one of its options",
                self.answer, self.question
            )));
        }
        Ok(())
    }
}

/// Named entities found in the article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntities {
    /// People mentioned
    #[serde(default, deserialize_with = "null_as_default")]
    pub people: Vec<String>,
    /// Organizations mentioned
    #[serde(default, deserialize_with = "null_as_default")]
    pub organizations: Vec<String>,
    /// Places mentioned
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
}

/// The model-generated part of a quiz record.
///
/// Absent and `null` fields both decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizContent {
    /// Entities grouped by category
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_entities: KeyEntities,
    /// The questions
    #[serde(default, deserialize_with = "null_as_default")]
    pub quiz: Vec<QuizQuestion>,
    /// Wikipedia topic names worth reading next
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_topics: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl QuizContent {
    /// Decode a synthesized JSON object and check every question against the schema.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the object does not match the quiz shape
    /// (including unknown difficulty values) or any question fails
    /// [`QuizQuestion::validate`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        let content: QuizContent = serde_json::from_value(value)
            .map_err(|e| ValidationError::new(format!("quiz payload has wrong shape: {}", e)))?;
        content.validate()?;
        Ok(content)
    }

    /// Validate every question.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.quiz.iter().try_for_each(QuizQuestion::validate)
    }
}
