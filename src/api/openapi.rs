//! OpenAPI document and the documentation routes.

use axum::Router;
use utoipa::OpenApi;

use crate::api::dto::{
    AnswerResponse, ChoiceResponse, CreateChoiceRequest, CreateQuestionRequest, QuestionResponse,
};
use crate::api::handlers::{quiz, system};
use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// Path serving the raw OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path that `GET /` redirects to.
#[cfg(feature = "swagger-ui")]
pub const DOCS_PATH: &str = "/docs";

/// Path that `GET /` redirects to.
#[cfg(not(feature = "swagger-ui"))]
pub const DOCS_PATH: &str = OPENAPI_JSON_PATH;

/// OpenAPI description of every public endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "quiz-service", description = "Quiz questions and answer checking"),
    paths(
        quiz::create_question,
        quiz::list_questions,
        quiz::get_question,
        quiz::get_answer,
        quiz::check_answer,
        system::health_handler,
    ),
    components(schemas(
        CreateQuestionRequest,
        CreateChoiceRequest,
        QuestionResponse,
        ChoiceResponse,
        AnswerResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Quiz", description = "Questions, choices, and answers"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document and, with the `swagger-ui`
/// feature, the interactive UI at [`DOCS_PATH`].
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
    )
}

/// Routes serving the OpenAPI document.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(
        OPENAPI_JSON_PATH,
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
