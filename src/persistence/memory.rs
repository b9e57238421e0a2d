//! In-process quiz store.
//!
//! Mirrors the PostgreSQL store's semantics: ids are generated by the
//! store, question text is unique, and a create either lands completely
//! or not at all. Used when persistence is disabled and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuizStore, normalize_search};
use crate::domain::{Choice, NewQuestion, Question};
use crate::error::QuizError;

#[derive(Debug, Default)]
struct Tables {
    questions: Vec<Question>,
    last_question_id: i64,
    last_choice_id: i64,
}

/// Quiz store backed by a `tokio::sync::RwLock` over in-memory tables.
#[derive(Debug, Default)]
pub struct MemoryQuizStore {
    tables: RwLock<Tables>,
}

impl MemoryQuizStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn initialize(&self) -> Result<(), QuizError> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, QuizError> {
        let mut tables = self.tables.write().await;

        if tables
            .questions
            .iter()
            .any(|q| q.question_text == question.question_text)
        {
            return Err(QuizError::DuplicateQuestion(question.question_text.clone()));
        }

        tables.last_question_id += 1;
        let question_id = tables.last_question_id;

        let mut choices = Vec::with_capacity(question.choices.len());
        for choice in &question.choices {
            tables.last_choice_id += 1;
            choices.push(Choice {
                id: tables.last_choice_id,
                choice_text: choice.choice_text.clone(),
                is_correct: choice.is_correct,
                question_id,
            });
        }

        let created = Question {
            id: question_id,
            question_text: question.question_text.clone(),
            choices,
        };
        tables.questions.push(created.clone());
        Ok(created)
    }

    async fn list_questions(&self, search: Option<&str>) -> Result<Vec<Question>, QuizError> {
        let needle = normalize_search(search).map(str::to_lowercase);
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| {
                needle
                    .as_deref()
                    .is_none_or(|n| q.question_text.to_lowercase().contains(n))
            })
            .cloned()
            .collect())
    }

    async fn get_question(&self, question_id: i64) -> Result<Option<Question>, QuizError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .cloned())
    }

    async fn get_correct_choice(&self, question_id: i64) -> Result<Option<Choice>, QuizError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .and_then(Question::correct_choice)
            .cloned())
    }

    async fn check_answer(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<Option<Choice>, QuizError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .and_then(|q| q.choices.iter().find(|c| c.id == choice_id && c.is_correct))
            .cloned())
    }
}
