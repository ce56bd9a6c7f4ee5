//! HTTP service for the WikiQuiz generator.
//!
//! Exposes quiz generation and history over a small JSON API:
//!
//! - `POST /generate-quiz` turns a Wikipedia article URL into a stored quiz
//! - `GET /quizzes` lists stored quizzes, newest first
//! - `GET /quizzes/{id}` returns one stored quiz
//! - `GET /health` reports liveness
//!
//! The [`QuizService`] holds the workflow and depends only on the
//! `wikiquiz_interface` traits, so it runs equally well over PostgreSQL and
//! Gemini ([`connect`]) or over in-memory stand-ins.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod observability;
mod routes;
mod service;
mod state;

pub use config::{
    DEFAULT_APP_ENV, DatabaseSection, ExtractorSection, LoggingSection, ModelSection, Secrets,
    ServerSection, WikiQuizConfig,
};
pub use error::{ApiError, ApiResult};
pub use observability::init_observability;
pub use routes::{
    AppState, GenerateQuizRequest, ListParams, cors_layer, create_router, normalize_url,
};
pub use service::{DEFAULT_LIST_LIMIT, QuizService};
pub use state::connect;
