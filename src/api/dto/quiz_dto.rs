//! Question, choice, and answer-check DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Choice, NewChoice, NewQuestion, Question};
use crate::service::AnswerCheck;

/// One choice inside a `POST /quiz/questions` body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateChoiceRequest {
    /// Answer text.
    pub choice_text: String,
    /// Whether this choice is a correct answer.
    pub is_correct: bool,
}

/// Request body for `POST /quiz/questions`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    /// Prompt text; must be non-blank and unique.
    pub question_text: String,
    /// Answer candidates. Any number, including none.
    pub choices: Vec<CreateChoiceRequest>,
}

/// A stored choice as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChoiceResponse {
    /// Storage-assigned choice ID.
    pub id: i64,
    /// Answer text.
    pub choice_text: String,
    /// Whether this choice is a correct answer.
    pub is_correct: bool,
}

/// A stored question with its choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    /// Storage-assigned question ID.
    pub id: i64,
    /// Prompt text.
    pub question_text: String,
    /// Choices in insertion order.
    pub choices: Vec<ChoiceResponse>,
}

/// Response body for `GET /quiz/questions/{id}/answer/{answer_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    /// `true` only when the choice exists, belongs to the question, and is correct.
    pub is_correct: bool,
    /// `"Congrats!!!"` or `"NO!"`.
    pub message: String,
}

/// Query parameters for `GET /quiz/questions`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuestionsParams {
    /// Keep only questions whose text contains this string, ignoring case.
    #[serde(default)]
    pub search: Option<String>,
}

impl From<CreateChoiceRequest> for NewChoice {
    fn from(req: CreateChoiceRequest) -> Self {
        Self::new(req.choice_text, req.is_correct)
    }
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        Self::new(
            req.question_text,
            req.choices.into_iter().map(NewChoice::from).collect(),
        )
    }
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.choice_text,
            is_correct: choice.is_correct,
        }
    }
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text,
            choices: question
                .choices
                .into_iter()
                .map(ChoiceResponse::from)
                .collect(),
        }
    }
}

impl From<AnswerCheck> for AnswerResponse {
    fn from(check: AnswerCheck) -> Self {
        Self {
            is_correct: check.is_correct,
            message: check.message.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_maps_to_new_question() {
        let json = r#"{"question_text":"2+2=?","choices":[
            {"choice_text":"4","is_correct":true},
            {"choice_text":"5","is_correct":false}]}"#;
        let Ok(req) = serde_json::from_str::<CreateQuestionRequest>(json) else {
            panic!("valid request body");
        };
        let question = NewQuestion::from(req);
        assert_eq!(question.question_text, "2+2=?");
        assert_eq!(
            question.choices,
            vec![NewChoice::new("4", true), NewChoice::new("5", false)]
        );
    }

    #[test]
    fn missing_correctness_flag_is_rejected() {
        let json = r#"{"question_text":"2+2=?","choices":[{"choice_text":"4"}]}"#;
        assert!(serde_json::from_str::<CreateQuestionRequest>(json).is_err());
    }

    #[test]
    fn response_drops_back_reference() {
        let question = Question {
            id: 3,
            question_text: "2+2=?".to_string(),
            choices: vec![Choice {
                id: 9,
                choice_text: "4".to_string(),
                is_correct: true,
                question_id: 3,
            }],
        };
        let value = serde_json::to_value(QuestionResponse::from(question)).ok();
        let expected = serde_json::json!({
            "id": 3,
            "question_text": "2+2=?",
            "choices": [{"id": 9, "choice_text": "4", "is_correct": true}],
        });
        assert_eq!(value, Some(expected));
    }

    #[test]
    fn answer_response_carries_message() {
        let right = AnswerResponse::from(AnswerCheck::from_correct(true));
        assert_eq!(right.message, "Congrats!!!");
        let wrong = AnswerResponse::from(AnswerCheck::from_correct(false));
        assert!(!wrong.is_correct);
        assert_eq!(wrong.message, "NO!");
    }
}
