//! Sample rows inserted the first time the catalog starts.

use chrono::{TimeZone, Utc};
use podcast_core::types::Timestamp;

use crate::models::episode::CreateEpisode;
use crate::models::podcast::CreatePodcast;
use crate::models::user::CreateUser;
use crate::repositories::{EpisodeRepo, PodcastRepo, UserRepo};
use crate::{DbPool, StoreError};

/// `(username, email)`
const USERS: [(&str, &str); 2] = [
    ("johndoe", "john@example.com"),
    ("janesmith", "jane@example.com"),
];

/// `(title, description, cover_image_url, index into USERS)`
const PODCASTS: [(&str, &str, &str, usize); 3] = [
    (
        "Tech Talk",
        "Weekly conversations about software, hardware and the people building them.",
        "https://example.com/covers/tech-talk.jpg",
        0,
    ),
    (
        "Cooking Corner",
        "Recipes, techniques and kitchen stories from home cooks and chefs.",
        "https://example.com/covers/cooking-corner.jpg",
        1,
    ),
    (
        "History Hour",
        "Deep dives into the events and figures that shaped the world.",
        "https://example.com/covers/history-hour.jpg",
        0,
    ),
];

/// `(index into PODCASTS, title, description, audio_url, duration, published (y, m, d))`
const EPISODES: [(usize, &str, &str, &str, i64, (i32, u32, u32)); 4] = [
    (
        0,
        "The Future of Rust",
        "Where systems programming is heading over the next decade.",
        "https://example.com/audio/tech-talk-1.mp3",
        2400,
        (2024, 1, 8),
    ),
    (
        0,
        "Databases Demystified",
        "Indexes, joins and why your query plan matters.",
        "https://example.com/audio/tech-talk-2.mp3",
        3100,
        (2024, 1, 15),
    ),
    (
        1,
        "Perfect Pasta",
        "Fresh dough, sauces and timing the boil.",
        "https://example.com/audio/cooking-corner-1.mp3",
        1800,
        (2024, 1, 10),
    ),
    (
        2,
        "The Fall of Rome",
        "What really brought the Western Empire to its end.",
        "https://example.com/audio/history-hour-1.mp3",
        3600,
        (2024, 1, 12),
    ),
];

/// Whether the seed set still has to be inserted.
///
/// Keyed solely on the presence of users: a store with any user row is
/// treated as seeded, whatever the podcast and episode tables contain. A store
/// with podcasts but no users is seeded again.
pub async fn needs_seed(pool: &DbPool) -> Result<bool, StoreError> {
    Ok(UserRepo::count(pool).await? == 0)
}

/// Insert the fixed seed set in one transaction.
///
/// Does not check [`needs_seed`]; callers decide whether to seed.
pub async fn insert_seed_data(pool: &DbPool) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    let mut user_ids = Vec::with_capacity(USERS.len());
    for (username, email) in USERS {
        let input = CreateUser {
            username: username.to_string(),
            email: email.to_string(),
        };
        user_ids.push(UserRepo::create(&mut *tx, &input).await?);
    }

    let mut podcast_ids = Vec::with_capacity(PODCASTS.len());
    for (title, description, cover, author) in PODCASTS {
        let input = CreatePodcast {
            title: title.to_string(),
            description: description.to_string(),
            cover_image_url: Some(cover.to_string()),
            author_id: user_ids[author],
        };
        podcast_ids.push(PodcastRepo::create(&mut *tx, &input).await?);
    }

    for (podcast, title, description, audio_url, duration, published) in EPISODES {
        let input = CreateEpisode {
            podcast_id: podcast_ids[podcast],
            title: title.to_string(),
            description: description.to_string(),
            audio_url: audio_url.to_string(),
            duration,
            published_at: published_on(published),
        };
        EpisodeRepo::create(&mut *tx, &input).await?;
    }

    tx.commit().await?;

    tracing::info!(
        users = USERS.len(),
        podcasts = PODCASTS.len(),
        episodes = EPISODES.len(),
        "Inserted seed data"
    );
    Ok(())
}

/// Nine in the morning UTC on the given date.
fn published_on((year, month, day): (i32, u32, u32)) -> Option<Timestamp> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single()
}
