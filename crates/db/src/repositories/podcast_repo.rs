//! Repository for the `podcasts` table.
//!
//! Every read joins `users` so rows carry the author's username.

use podcast_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::podcast::{CreatePodcast, Podcast};
use crate::DbPool;

/// Podcast columns plus the joined author name. Expects `podcasts p` and
/// `users u` aliases.
const COLUMNS: &str = "p.id, p.title, p.description, p.cover_image_url, p.author_id, \
                       p.created_at, u.username AS author_name";

/// Provides insert and read operations for podcasts.
pub struct PodcastRepo;

impl PodcastRepo {
    /// Insert a new podcast, returning its assigned ID.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreatePodcast,
    ) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO podcasts (title, description, cover_image_url, author_id) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.cover_image_url)
        .bind(input.author_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List all podcasts, most recently created first.
    ///
    /// Podcasts created in the same instant are ordered by descending ID.
    pub async fn list(pool: &DbPool) -> Result<Vec<Podcast>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM podcasts p \
             JOIN users u ON p.author_id = u.id \
             ORDER BY datetime(p.created_at) DESC, p.id DESC"
        );
        sqlx::query_as::<_, Podcast>(&query).fetch_all(pool).await
    }

    /// Find a podcast by ID.
    ///
    /// The ID is bound exactly as given. SQLite coerces numeric text against
    /// the integer key, so anything that is not a number simply matches no row.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Podcast>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM podcasts p \
             JOIN users u ON p.author_id = u.id \
             WHERE p.id = ?"
        );
        sqlx::query_as::<_, Podcast>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all podcasts.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM podcasts")
            .fetch_one(pool)
            .await
    }
}
