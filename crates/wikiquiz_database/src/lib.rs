//! PostgreSQL persistence for the WikiQuiz generator.
//!
//! This crate provides the `wiki_quizzes` schema, its diesel row models and
//! two [`QuizRepository`](wikiquiz_interface::QuizRepository) implementations:
//!
//! - [`PostgresQuizRepository`] over an r2d2 connection pool
//! - [`InMemoryQuizRepository`] for tests and database-free runs
//!
//! # Example
//!
//! ```rust,ignore
//! use wikiquiz_database::{create_pool, run_migrations, PostgresQuizRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(&std::env::var("DATABASE_URL")?, 10)?;
//! run_migrations(&pool).await?;
//! let repo = PostgresQuizRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod connection;
mod in_memory_repository;
mod migrations;
mod models;
mod quiz_repository;

pub mod schema;

pub use connection::{DbConnection, DbPool, create_pool};
pub use in_memory_repository::InMemoryQuizRepository;
pub use migrations::{MIGRATIONS, run_migrations};
pub use models::{NewQuizRow, QuizRow};
pub use quiz_repository::PostgresQuizRepository;
