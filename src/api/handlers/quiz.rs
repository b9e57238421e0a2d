//! Quiz handlers: create, list, get, answer lookup, and answer check.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    AnswerResponse, ChoiceResponse, CreateQuestionRequest, ListQuestionsParams, QuestionResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, QuizError};

/// `POST /quiz/questions` — Create a question with its choices.
///
/// # Errors
///
/// Returns [`QuizError::DuplicateQuestion`] when the text is taken and
/// [`QuizError::InvalidRequest`] for blank text or an unreadable body.
#[utoipa::path(
    post,
    path = "/quiz/questions",
    tag = "Quiz",
    summary = "Create a question",
    description = "Stores a question together with all of its choices in one transaction.",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Blank question text or malformed body", body = ErrorResponse),
        (status = 409, description = "A question with this text already exists", body = ErrorResponse),
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuizError> {
    let Json(req) = payload?;
    let question = state.quiz_service.create_question(req.into()).await?;
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// `GET /quiz/questions` — List questions with their choices.
///
/// # Errors
///
/// Returns [`QuizError`] on storage failures.
#[utoipa::path(
    get,
    path = "/quiz/questions",
    tag = "Quiz",
    summary = "List questions",
    description = "Returns every question with its choices, optionally filtered by a case-insensitive substring.",
    params(ListQuestionsParams),
    responses(
        (status = 200, description = "Question list, possibly empty", body = Vec<QuestionResponse>),
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<ListQuestionsParams>, QueryRejection>,
) -> Result<impl IntoResponse, QuizError> {
    let Query(params) = params?;
    let questions = state
        .quiz_service
        .list_questions(params.search.as_deref())
        .await?;
    let body: Vec<QuestionResponse> = questions.into_iter().map(QuestionResponse::from).collect();
    Ok(Json(body))
}

/// `GET /quiz/questions/{id}` — Get one question.
///
/// # Errors
///
/// Returns [`QuizError::QuestionNotFound`] if the question does not exist.
#[utoipa::path(
    get,
    path = "/quiz/questions/{id}",
    tag = "Quiz",
    summary = "Get a question",
    params(
        ("id" = i64, Path, description = "Question ID"),
    ),
    responses(
        (status = 200, description = "Question with choices", body = QuestionResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
    )
)]
pub async fn get_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, QuizError> {
    let Path(id) = id?;
    let question = state
        .quiz_service
        .get_question(id)
        .await?
        .ok_or(QuizError::QuestionNotFound(id))?;
    Ok(Json(QuestionResponse::from(question)))
}

/// `GET /quiz/questions/{id}/answer` — Get the correct choice.
///
/// # Errors
///
/// Returns [`QuizError::AnswerNotFound`] if the question does not exist or
/// has no correct choice.
#[utoipa::path(
    get,
    path = "/quiz/questions/{id}/answer",
    tag = "Quiz",
    summary = "Get the correct answer",
    params(
        ("id" = i64, Path, description = "Question ID"),
    ),
    responses(
        (status = 200, description = "The correct choice", body = ChoiceResponse),
        (status = 404, description = "No correct choice found", body = ErrorResponse),
    )
)]
pub async fn get_answer(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, QuizError> {
    let Path(id) = id?;
    let choice = state
        .quiz_service
        .get_correct_choice(id)
        .await?
        .ok_or(QuizError::AnswerNotFound(id))?;
    Ok(Json(ChoiceResponse::from(choice)))
}

/// `GET /quiz/questions/{id}/answer/{answer_id}` — Check a submitted answer.
///
/// Always answers 200; an unknown question or choice grades as incorrect.
///
/// # Errors
///
/// Returns [`QuizError`] on storage failures.
#[utoipa::path(
    get,
    path = "/quiz/questions/{id}/answer/{answer_id}",
    tag = "Quiz",
    summary = "Check an answer",
    description = "Reports whether the choice is a correct answer to the question. Unknown IDs are graded as incorrect rather than 404.",
    params(
        ("id" = i64, Path, description = "Question ID"),
        ("answer_id" = i64, Path, description = "Choice ID"),
    ),
    responses(
        (status = 200, description = "Verdict", body = AnswerResponse),
    )
)]
pub async fn check_answer(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<impl IntoResponse, QuizError> {
    let Path((id, answer_id)) = ids?;
    let check = state.quiz_service.check_answer(id, answer_id).await?;
    Ok(Json(AnswerResponse::from(check)))
}

/// Quiz routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", get(get_question))
        .route("/questions/{id}/answer", get(get_answer))
        .route("/questions/{id}/answer/{answer_id}", get(check_answer))
}
