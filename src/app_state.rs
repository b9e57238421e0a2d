//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::QuizStore;
use crate::service::QuizService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quiz service for all business logic.
    pub quiz_service: QuizService,
}

impl AppState {
    /// Builds the state around an explicitly passed storage handle.
    #[must_use]
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self {
            quiz_service: QuizService::new(store),
        }
    }
}
