//! Persistence layer: question and choice storage.
//!
//! [`QuizStore`] is the seam between the service and storage. Every call
//! is self-contained: it takes what it needs from a connection pool (or
//! the in-memory tables) and releases it before returning, so no session
//! outlives a single operation.
//!
//! Lookups that match nothing return `Ok(None)` or an empty `Vec`. Only
//! integrity conflicts and storage failures are reported as errors.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Choice, NewQuestion, Question};
use crate::error::QuizError;

pub use memory::MemoryQuizStore;
pub use postgres::PostgresQuizStore;

/// Storage operations for quiz questions.
#[async_trait]
pub trait QuizStore: Send + Sync + std::fmt::Debug {
    /// Creates the backing tables if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the schema cannot be created.
    async fn initialize(&self) -> Result<(), QuizError>;

    /// Returns `true` when the store answers a trivial query.
    async fn health_check(&self) -> bool;

    /// Inserts a question and all of its choices as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::DuplicateQuestion`] when the text is already
    /// taken; nothing is written in that case.
    async fn create_question(&self, question: &NewQuestion) -> Result<Question, QuizError>;

    /// Lists questions with their choices, optionally keeping only those
    /// whose text contains `search` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    async fn list_questions(&self, search: Option<&str>) -> Result<Vec<Question>, QuizError>;

    /// Fetches one question with its choices.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    async fn get_question(&self, question_id: i64) -> Result<Option<Question>, QuizError>;

    /// Fetches the correct choice of a question, lowest id first.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    async fn get_correct_choice(&self, question_id: i64) -> Result<Option<Choice>, QuizError>;

    /// Returns the choice only if it belongs to the question and is
    /// flagged correct.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    async fn check_answer(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<Option<Choice>, QuizError>;
}

/// Treats an empty search string as no filter at all.
fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.filter(|s| !s.is_empty())
}
