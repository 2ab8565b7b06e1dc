//! Route definitions for podcasts.

use axum::routing::get;
use axum::Router;

use crate::handlers::podcast;
use crate::state::AppState;

/// Routes mounted at `/podcasts`.
///
/// ```text
/// GET  /       -> list
/// GET  /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(podcast::list))
        .route("/{id}", get(podcast::get_by_id))
}
