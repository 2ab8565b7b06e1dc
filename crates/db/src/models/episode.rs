use podcast_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub podcast_id: DbId,
    pub title: String,
    pub description: String,
    pub audio_url: String,
    /// Length in seconds.
    pub duration: i64,
    pub published_at: Timestamp,
}

/// DTO for inserting an episode.
///
/// `published_at` falls back to the insertion time when `None`.
#[derive(Debug, Clone)]
pub struct CreateEpisode {
    pub podcast_id: DbId,
    pub title: String,
    pub description: String,
    pub audio_url: String,
    pub duration: i64,
    pub published_at: Option<Timestamp>,
}
