//! Handlers for the read-only `/podcasts` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use podcast_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/podcasts
///
/// List every podcast with its author's username, most recent first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let podcasts = state
        .catalog
        .list_podcasts()
        .await
        .map_err(|e| AppError::store("Failed to fetch podcasts", e))?;
    Ok(Json(DataResponse::new(podcasts)))
}

/// GET /api/podcasts/{id}
///
/// Fetch one podcast with its episodes. The ID is handed to the store as
/// received, so a malformed ID is reported the same way as an unknown one.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let podcast = state
        .catalog
        .get_podcast(&id)
        .await
        .map_err(|e| AppError::store("Failed to fetch podcast", e))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Podcast",
            id,
        }))?;
    Ok(Json(DataResponse::new(podcast)))
}
