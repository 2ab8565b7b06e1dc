//! Podcast entity model and the detail view served by the single-podcast
//! endpoint.

use podcast_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::episode::Episode;

/// A row from `podcasts` joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Podcast {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub author_id: DbId,
    pub created_at: Timestamp,
    /// `users.username` of the author.
    pub author_name: String,
}

/// A podcast together with its episodes, newest first.
///
/// Serializes as the podcast's own fields plus an `episodes` array.
#[derive(Debug, Clone, Serialize)]
pub struct PodcastDetail {
    #[serde(flatten)]
    pub podcast: Podcast,
    pub episodes: Vec<Episode>,
}

/// DTO for inserting a podcast.
#[derive(Debug, Clone)]
pub struct CreatePodcast {
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub author_id: DbId,
}
