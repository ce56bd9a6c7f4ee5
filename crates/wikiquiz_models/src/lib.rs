//! Language model drivers for the WikiQuiz generator.
//!
//! Currently a single backend, [`GeminiClient`], which implements
//! [`QuizDriver`](wikiquiz_interface::QuizDriver) over the `gemini-rust` SDK.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiClient};
