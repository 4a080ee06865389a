//! Error types for the Bookstall server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main application error type.
///
/// The enumeration is closed: every failure a handler can bubble up is either
/// a missing resource or a store failure, and each carries its HTTP status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Status and user-facing message carried through response extensions so the
/// error-page middleware can re-render the failure inside the shared chrome.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
        };

        let mut response = (status, message.clone()).into_response();
        response
            .extensions_mut()
            .insert(ErrorContext { status, message });
        response
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
