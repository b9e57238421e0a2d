//! Quiz service: validates, stores, and grades.

use std::sync::Arc;

use crate::domain::{Choice, NewQuestion, Question, is_storable_text};
use crate::error::QuizError;
use crate::persistence::QuizStore;

/// Message returned for a correct answer.
pub const CORRECT_MESSAGE: &str = "Congrats!!!";

/// Message returned for a wrong or unknown answer.
pub const INCORRECT_MESSAGE: &str = "NO!";

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    /// Whether the submitted choice is a correct answer to the question.
    pub is_correct: bool,
    /// Fixed human-readable verdict.
    pub message: &'static str,
}

impl AnswerCheck {
    /// Builds the verdict for a correctness flag.
    #[must_use]
    pub const fn from_correct(is_correct: bool) -> Self {
        Self {
            is_correct,
            message: if is_correct {
                CORRECT_MESSAGE
            } else {
                INCORRECT_MESSAGE
            },
        }
    }
}

/// Orchestration layer for all quiz operations.
///
/// Stateless coordinator around an injected [`QuizStore`]; every method
/// is a single storage round trip.
#[derive(Debug, Clone)]
pub struct QuizService {
    store: Arc<dyn QuizStore>,
}

impl QuizService {
    /// Creates a new `QuizService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }

    /// Validates and stores a question with its choices.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidRequest`] for blank question text or
    /// text containing NUL, and [`QuizError::DuplicateQuestion`] when the
    /// text is already taken.
    pub async fn create_question(&self, question: NewQuestion) -> Result<Question, QuizError> {
        if question.question_text.trim().is_empty() {
            return Err(QuizError::InvalidRequest(
                "question_text must not be empty".to_string(),
            ));
        }
        if !is_storable_text(&question.question_text) {
            return Err(QuizError::InvalidRequest(
                "question_text must not contain NUL characters".to_string(),
            ));
        }
        if !question
            .choices
            .iter()
            .all(|c| is_storable_text(&c.choice_text))
        {
            return Err(QuizError::InvalidRequest(
                "choice_text must not contain NUL characters".to_string(),
            ));
        }

        match self.store.create_question(&question).await {
            Ok(created) => {
                tracing::info!(
                    question_id = created.id,
                    choices = created.choices.len(),
                    "question created"
                );
                Ok(created)
            }
            Err(QuizError::DuplicateQuestion(text)) => {
                tracing::warn!(question_text = %text, "duplicate question rejected");
                Err(QuizError::DuplicateQuestion(text))
            }
            Err(e) => Err(e),
        }
    }

    /// Lists questions, optionally filtered by a case-insensitive substring.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    pub async fn list_questions(&self, search: Option<&str>) -> Result<Vec<Question>, QuizError> {
        self.store.list_questions(search).await
    }

    /// Fetches one question.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    pub async fn get_question(&self, question_id: i64) -> Result<Option<Question>, QuizError> {
        self.store.get_question(question_id).await
    }

    /// Fetches the correct choice of a question.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    pub async fn get_correct_choice(&self, question_id: i64) -> Result<Option<Choice>, QuizError> {
        self.store.get_correct_choice(question_id).await
    }

    /// Grades a submitted choice. Unknown questions and choices grade as
    /// incorrect.
    ///
    /// # Errors
    ///
    /// Returns a storage error on database failure.
    pub async fn check_answer(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<AnswerCheck, QuizError> {
        let matched = self.store.check_answer(question_id, choice_id).await?;
        tracing::debug!(question_id, choice_id, correct = matched.is_some(), "answer checked");
        Ok(AnswerCheck::from_correct(matched.is_some()))
    }

    /// Returns `true` when the store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
