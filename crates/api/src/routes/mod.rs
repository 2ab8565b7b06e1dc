pub mod health;
pub mod podcast;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /podcasts                  list podcasts with author names
/// /podcasts/{id}             one podcast with its episodes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/podcasts", podcast::router())
}
