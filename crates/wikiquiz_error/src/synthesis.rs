//! Quiz payload synthesis error types.

/// Synthesis error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// Model response could not be turned into a usable JSON object
    #[display("{}", _0)]
    Generation(String),
    /// The language model call itself failed
    #[display("Model call failed: {}", _0)]
    Driver(String),
}

/// Synthesis error with source location tracking.
///
/// # Examples
///
/// ```
/// use wikiquiz_error::{SynthesisError, SynthesisErrorKind};
///
/// let err = SynthesisError::new(SynthesisErrorKind::Generation(
///     "LLM did not return a JSON object.".into(),
/// ));
/// assert_eq!(err.kind.to_string(), "LLM did not return a JSON object.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis Error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The kind of error that occurred
    pub kind: SynthesisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new SynthesisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`SynthesisErrorKind::Generation`] error.
    #[track_caller]
    pub fn generation(message: impl Into<String>) -> Self {
        Self::new(SynthesisErrorKind::Generation(message.into()))
    }
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = std::result::Result<T, SynthesisError>;
