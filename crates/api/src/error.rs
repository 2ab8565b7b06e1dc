use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use podcast_core::error::CoreError;
use podcast_db::StoreError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{ success: false, message }`
/// envelope. Store failures never expose their cause in the body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `podcast_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog store failed. `message` is the client-facing text.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the message the client should see.
    pub fn store(message: &'static str, source: StoreError) -> Self {
        Self::Store { message, source }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id = %id, "Entity not found");
                    (StatusCode::NOT_FOUND, core.to_string())
                }
            },
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
