//! # quiz-service
//!
//! REST service for quiz questions: create a question with its choices,
//! list and fetch questions, look up the correct answer, and grade a
//! submitted answer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + DTOs (api/)
//!     │
//!     ├── QuizService (service/)
//!     │
//!     ├── QuizStore (persistence/)
//!     │     ├── PostgresQuizStore (sqlx)
//!     │     └── MemoryQuizStore
//!     │
//!     └── Question / Choice entities (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the full HTTP application with tracing and CORS middleware.
pub fn build_app(state: AppState) -> Router {
    api::build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
