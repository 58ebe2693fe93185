//! Route definitions

use axum::{
    Router,
    routing::get,
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // The address page: view and update
        .route("/", get(handlers::page::show_page).post(handlers::page::submit))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
