//! Table definitions for the catalog.
//!
//! Tables are created in foreign-key dependency order. Every statement is
//! `IF NOT EXISTS`, so creation is safe to repeat on each start.

use crate::{DbPool, StoreError};

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL CHECK (length(username) > 0),
    email TEXT NOT NULL UNIQUE CHECK (length(email) > 0),
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_PODCASTS: &str = "\
CREATE TABLE IF NOT EXISTS podcasts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(title) > 0),
    description TEXT NOT NULL CHECK (length(description) > 0),
    cover_image_url TEXT,
    author_id INTEGER NOT NULL REFERENCES users(id),
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_EPISODES: &str = "\
CREATE TABLE IF NOT EXISTS episodes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    podcast_id INTEGER NOT NULL REFERENCES podcasts(id),
    title TEXT NOT NULL CHECK (length(title) > 0),
    description TEXT NOT NULL CHECK (length(description) > 0),
    audio_url TEXT NOT NULL CHECK (length(audio_url) > 0),
    duration INTEGER NOT NULL CHECK (duration > 0),
    published_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_INDEXES: [&str; 2] = [
    "CREATE INDEX IF NOT EXISTS idx_podcasts_author_id ON podcasts(author_id)",
    "CREATE INDEX IF NOT EXISTS idx_episodes_podcast_id ON episodes(podcast_id)",
];

/// Table name and DDL, in creation order.
const TABLES: [(&str, &str); 3] = [
    ("users", CREATE_USERS),
    ("podcasts", CREATE_PODCASTS),
    ("episodes", CREATE_EPISODES),
];

/// Create the `users`, `podcasts` and `episodes` tables if absent.
pub async fn create_tables(pool: &DbPool) -> Result<(), StoreError> {
    for (table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "Ensured table exists");
    }

    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
