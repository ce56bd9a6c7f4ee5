//! Trait definitions for the WikiQuiz pipeline.
//!
//! Each external collaborator of the quiz service sits behind one of these
//! traits so that it can be constructed explicitly and substituted in tests.

mod repository;
mod traits;

pub use repository::QuizRepository;
pub use traits::{ArticleSource, QuizDriver};
