//! Article extraction error types.

/// Article extraction error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractErrorKind {
    /// URL is not a Wikipedia article URL
    #[display(
        "Only Wikipedia article URLs are allowed (must contain wikipedia.org/wiki/): {}",
        _0
    )]
    InvalidSource(String),
    /// Network failure, timeout, or non-success status
    #[display("Failed to fetch article: {}", _0)]
    Fetch(String),
    /// Page markup is missing the article content container
    #[display("Could not parse article: {}", _0)]
    Parse(String),
    /// HTTP client could not be constructed
    #[display("Failed to build HTTP client: {}", _0)]
    Client(String),
}

/// Extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use wikiquiz_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::InvalidSource("https://example.com".into()));
/// assert!(format!("{}", err.kind).contains("wikipedia.org/wiki/"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extract Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
