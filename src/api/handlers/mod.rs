//! REST endpoint handlers organized by resource.

pub mod quiz;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/quiz`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(quiz::routes())
}
