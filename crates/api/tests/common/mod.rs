use std::net::IpAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use podcast_api::config::{CorsOrigins, ServerConfig};
use podcast_api::router::build_app_router;
use podcast_api::state::AppState;
use podcast_db::{schema, CatalogStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: CorsOrigins::Any,
    }
}

/// A fresh in-memory catalog holding the seed set.
pub async fn seeded_catalog() -> CatalogStore {
    let pool = podcast_db::create_memory_pool().await.unwrap();
    let catalog = CatalogStore::new(pool);
    catalog.initialize().await.unwrap();
    catalog
}

/// A fresh in-memory catalog with the schema but no rows.
pub async fn empty_catalog() -> CatalogStore {
    let pool = podcast_db::create_memory_pool().await.unwrap();
    schema::create_tables(&pool).await.unwrap();
    CatalogStore::new(pool)
}

/// Build the full application router over the given catalog.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack (CORS, request ID, tracing, panic recovery).
pub fn build_test_app(catalog: CatalogStore) -> Router {
    let state = AppState {
        catalog,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
