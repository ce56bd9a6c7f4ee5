//! Core data types for the WikiQuiz generator.
//!
//! This crate holds the types shared by every pipeline stage: the extracted
//! [`Article`], the quiz schema ([`QuizQuestion`], [`KeyEntities`],
//! [`QuizContent`]), the persisted [`QuizRecord`] with its API projections, and
//! the request/response envelope spoken to language model drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod message;
mod quiz;
mod record;
mod request;
mod role;

pub use article::Article;
pub use message::Message;
pub use quiz::{Difficulty, KeyEntities, OPTIONS_PER_QUESTION, QuizContent, QuizQuestion};
pub use record::{NewQuiz, QuizListItem, QuizPayload, QuizRecord};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
