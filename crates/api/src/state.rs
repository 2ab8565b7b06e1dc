use std::sync::Arc;

use podcast_db::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog store serving every API read.
    pub catalog: CatalogStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
