//! Repository for the `episodes` table.

use podcast_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::episode::{CreateEpisode, Episode};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, podcast_id, title, description, audio_url, duration, published_at";

/// Provides insert and read operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning its assigned ID.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateEpisode,
    ) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO episodes \
                (podcast_id, title, description, audio_url, duration, published_at) \
             VALUES (?, ?, ?, ?, ?, COALESCE(?, CURRENT_TIMESTAMP))",
        )
        .bind(input.podcast_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.audio_url)
        .bind(input.duration)
        .bind(input.published_at)
        .execute(&mut *conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List episodes for a podcast, newest first.
    pub async fn list_by_podcast(
        pool: &DbPool,
        podcast_id: DbId,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes \
             WHERE podcast_id = ? \
             ORDER BY datetime(published_at) DESC, id DESC"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(podcast_id)
            .fetch_all(pool)
            .await
    }

    /// Count all episodes.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM episodes")
            .fetch_one(pool)
            .await
    }
}
