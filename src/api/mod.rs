//! REST API layer: route handlers, DTOs, OpenAPI, and router composition.
//!
//! Quiz endpoints are mounted under `/quiz`; health, documentation, and
//! the root redirect live at the top level.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/quiz", handlers::routes())
        .merge(handlers::system::routes())
        .merge(openapi::routes())
}
