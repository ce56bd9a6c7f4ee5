//! Top-level error wrapper types.

use crate::{
    ConfigError, DatabaseError, ExtractError, GeminiError, SynthesisError, ValidationError,
};

/// Every error condition the quiz pipeline can report.
///
/// # Examples
///
/// ```
/// use wikiquiz_error::{ConfigError, WikiQuizError};
///
/// let err: WikiQuizError = ConfigError::new("Missing GEMINI_API_KEY").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WikiQuizErrorKind {
    /// Article extraction error
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Quiz payload synthesis error
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Gemini model error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Quiz schema violation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// WikiQuiz error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("WikiQuiz Error: {}", _0)]
pub struct WikiQuizError(Box<WikiQuizErrorKind>);

impl WikiQuizError {
    /// Create a new error from a kind.
    pub fn new(kind: WikiQuizErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WikiQuizErrorKind {
        &self.0
    }

    /// The underlying condition without source location, suitable for callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikiquiz_error::{GeminiError, GeminiErrorKind, WikiQuizError};
    ///
    /// let err: WikiQuizError = GeminiError::new(GeminiErrorKind::EmptyResponse).into();
    /// assert_eq!(err.condition(), "Gemini returned an empty response");
    /// ```
    pub fn condition(&self) -> String {
        match self.kind() {
            WikiQuizErrorKind::Extract(e) => e.kind.to_string(),
            WikiQuizErrorKind::Synthesis(e) => e.kind.to_string(),
            WikiQuizErrorKind::Gemini(e) => e.kind.to_string(),
            WikiQuizErrorKind::Database(e) => e.kind.to_string(),
            WikiQuizErrorKind::Validation(e) => e.message.clone(),
            WikiQuizErrorKind::Config(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to WikiQuizErrorKind
impl<T> From<T> for WikiQuizError
where
    T: Into<WikiQuizErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for WikiQuiz operations.
pub type WikiQuizResult<T> = std::result::Result<T, WikiQuizError>;
