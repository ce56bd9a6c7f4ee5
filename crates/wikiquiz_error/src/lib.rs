//! Error types for the WikiQuiz generator.
//!
//! Every stage of the quiz pipeline reports failures through its own error type,
//! so callers can tell a bad source URL apart from a model failure or a storage
//! conflict without string matching.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use wikiquiz_error::{ExtractError, ExtractErrorKind, WikiQuizResult};
//!
//! fn fetch_article() -> WikiQuizResult<String> {
//!     Err(ExtractError::new(ExtractErrorKind::Fetch("connection refused".into())))?
//! }
//!
//! assert!(fetch_article().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod extract;
mod gemini;
mod synthesis;
mod validation;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind, DatabaseResult};
pub use error::{WikiQuizError, WikiQuizErrorKind, WikiQuizResult};
pub use extract::{ExtractError, ExtractErrorKind, ExtractResult};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult};
pub use synthesis::{SynthesisError, SynthesisErrorKind, SynthesisResult};
pub use validation::ValidationError;
