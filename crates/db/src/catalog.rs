//! The catalog store handle injected into the HTTP layer.

use crate::models::podcast::{Podcast, PodcastDetail};
use crate::repositories::{EpisodeRepo, PodcastRepo};
use crate::{schema, seed, DbPool, StoreError};

/// Owns the pool and answers the catalog's read queries.
///
/// Cheaply cloneable; clones share the same pool.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pool: DbPool,
}

impl CatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Create the schema and seed it if no user exists yet.
    ///
    /// Safe to call on every start. Returns `true` when the seed set was
    /// inserted by this call.
    pub async fn initialize(&self) -> Result<bool, StoreError> {
        schema::create_tables(&self.pool).await?;

        if !seed::needs_seed(&self.pool).await? {
            tracing::info!("Users already present, skipping seed data");
            return Ok(false);
        }

        seed::insert_seed_data(&self.pool).await?;
        Ok(true)
    }

    /// Every podcast with its author name, most recent first.
    pub async fn list_podcasts(&self) -> Result<Vec<Podcast>, StoreError> {
        PodcastRepo::list(&self.pool).await
    }

    /// One podcast with its episodes, or `None` if no podcast has this ID.
    pub async fn get_podcast(&self, id: &str) -> Result<Option<PodcastDetail>, StoreError> {
        let Some(podcast) = PodcastRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };

        let episodes = EpisodeRepo::list_by_podcast(&self.pool, podcast.id).await?;
        Ok(Some(PodcastDetail { podcast, episodes }))
    }

    /// Verify the store is reachable.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await
    }

    /// Close every connection. Subsequent queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
