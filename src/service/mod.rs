//! Service layer: business logic orchestration.
//!
//! [`QuizService`] validates incoming questions, delegates storage to a
//! [`crate::persistence::QuizStore`], and grades submitted answers.

pub mod quiz_service;

pub use quiz_service::{AnswerCheck, QuizService};
