//! PostgreSQL implementation of the quiz store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::{
    ChoiceRow, QuestionChoiceRow, choice_from_row, fold_question_rows, like_pattern,
};
use super::{QuizStore, normalize_search};
use crate::config::QuizConfig;
use crate::domain::{Choice, NewQuestion, Question, is_storable_text};
use crate::error::QuizError;

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS questions (\
         id BIGSERIAL PRIMARY KEY, \
         question_text TEXT NOT NULL UNIQUE)",
    "CREATE TABLE IF NOT EXISTS choices (\
         id BIGSERIAL PRIMARY KEY, \
         choice_text TEXT NOT NULL, \
         is_correct BOOLEAN NOT NULL DEFAULT FALSE, \
         question_id BIGINT NOT NULL REFERENCES questions (id) ON DELETE CASCADE)",
    "CREATE INDEX IF NOT EXISTS choices_question_id_idx ON choices (question_id)",
];

/// PostgreSQL-backed quiz store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresQuizStore {
    pool: PgPool,
}

impl PostgresQuizStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::StorageUnavailable`] when the database cannot
    /// be reached within the configured timeout.
    pub async fn connect(config: &QuizConfig) -> Result<Self, QuizError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| QuizError::StorageUnavailable(e.to_string()))?;
        Ok(Self::new(pool))
    }
}

/// Turns a unique-constraint violation into [`QuizError::DuplicateQuestion`].
fn map_insert_error(err: sqlx::Error, question_text: &str) -> QuizError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            QuizError::DuplicateQuestion(question_text.to_string())
        }
        _ => QuizError::from(err),
    }
}

#[async_trait]
impl QuizStore for PostgresQuizStore {
    async fn initialize(&self) -> Result<(), QuizError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::debug!("quiz schema ready");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(value) => value == 1,
            Err(e) => {
                tracing::error!(error = %e, "database health check failed");
                false
            }
        }
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, QuizError> {
        // Dropping the transaction on any early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let question_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO questions (question_text) VALUES ($1) RETURNING id",
        )
        .bind(&question.question_text)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, &question.question_text))?;

        let mut choices = Vec::with_capacity(question.choices.len());
        for choice in &question.choices {
            let id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO choices (choice_text, is_correct, question_id) \
                 VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(&choice.choice_text)
            .bind(choice.is_correct)
            .bind(question_id)
            .fetch_one(&mut *tx)
            .await?;

            choices.push(Choice {
                id,
                choice_text: choice.choice_text.clone(),
                is_correct: choice.is_correct,
                question_id,
            });
        }

        tx.commit()
            .await
            .map_err(|e| map_insert_error(e, &question.question_text))?;

        Ok(Question {
            id: question_id,
            question_text: question.question_text.clone(),
            choices,
        })
    }

    async fn list_questions(&self, search: Option<&str>) -> Result<Vec<Question>, QuizError> {
        let search = normalize_search(search);
        if search.is_some_and(|s| !is_storable_text(s)) {
            return Ok(Vec::new());
        }
        let pattern = search.map(like_pattern);
        let rows = sqlx::query_as::<_, QuestionChoiceRow>(
            "SELECT q.id, q.question_text, c.id, c.choice_text, c.is_correct \
             FROM questions q LEFT JOIN choices c ON c.question_id = q.id \
             WHERE $1::TEXT IS NULL OR q.question_text ILIKE $1 ESCAPE '\\' \
             ORDER BY q.id, c.id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(fold_question_rows(rows))
    }

    async fn get_question(&self, question_id: i64) -> Result<Option<Question>, QuizError> {
        let rows = sqlx::query_as::<_, QuestionChoiceRow>(
            "SELECT q.id, q.question_text, c.id, c.choice_text, c.is_correct \
             FROM questions q LEFT JOIN choices c ON c.question_id = q.id \
             WHERE q.id = $1 ORDER BY c.id",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(fold_question_rows(rows).into_iter().next())
    }

    async fn get_correct_choice(&self, question_id: i64) -> Result<Option<Choice>, QuizError> {
        let row = sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, choice_text, is_correct, question_id FROM choices \
             WHERE question_id = $1 AND is_correct ORDER BY id LIMIT 1",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(choice_from_row))
    }

    async fn check_answer(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<Option<Choice>, QuizError> {
        let row = sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, choice_text, is_correct, question_id FROM choices \
             WHERE question_id = $1 AND id = $2 AND is_correct",
        )
        .bind(question_id)
        .bind(choice_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(choice_from_row))
    }
}
