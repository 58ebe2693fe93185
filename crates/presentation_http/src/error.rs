//! API error handling
//!
//! Errors that end a request instead of being rendered into the page.
//! Internal details are logged, not sent to the client.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors returned directly as HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Something went wrong on our side
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(detail) = self;
        error!(detail = %detail, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal error</h1><p>Something went wrong. Please try again.</p>"),
        )
            .into_response()
    }
}
