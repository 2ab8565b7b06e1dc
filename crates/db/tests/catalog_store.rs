//! Integration tests for schema creation, seeding and the catalog read queries.
//!
//! Each test runs against its own in-memory SQLite database.

use assert_matches::assert_matches;
use podcast_db::repositories::{EpisodeRepo, PodcastRepo, UserRepo};
use podcast_db::{schema, seed, CatalogStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn empty_store() -> CatalogStore {
    let pool = podcast_db::create_memory_pool().await.unwrap();
    CatalogStore::new(pool)
}

async fn seeded_store() -> CatalogStore {
    let store = empty_store().await;
    assert!(store.initialize().await.unwrap(), "fresh store should be seeded");
    store
}

async fn row_counts(store: &CatalogStore) -> (i64, i64, i64) {
    let pool = store.pool();
    (
        UserRepo::count(pool).await.unwrap(),
        PodcastRepo::count(pool).await.unwrap(),
        EpisodeRepo::count(pool).await.unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialize_creates_seed_set() {
    let store = seeded_store().await;
    assert_eq!(row_counts(&store).await, (2, 3, 4));
}

#[tokio::test]
async fn initialize_twice_is_idempotent() {
    let store = seeded_store().await;
    let before = row_counts(&store).await;

    let seeded = store.initialize().await.unwrap();

    assert!(!seeded, "second initialize must not seed");
    assert_eq!(row_counts(&store).await, before);
}

#[tokio::test]
async fn seed_guard_is_keyed_on_users_only() {
    let store = seeded_store().await;
    let pool = store.pool();

    sqlx::query("DELETE FROM episodes").execute(pool).await.unwrap();
    sqlx::query("DELETE FROM podcasts").execute(pool).await.unwrap();

    assert!(!seed::needs_seed(pool).await.unwrap());
    assert!(!store.initialize().await.unwrap());
    assert_eq!(row_counts(&store).await, (2, 0, 0));
}

#[tokio::test]
async fn needs_seed_on_fresh_schema() {
    let store = empty_store().await;
    schema::create_tables(store.pool()).await.unwrap();

    assert!(seed::needs_seed(store.pool()).await.unwrap());
}

#[tokio::test]
async fn health_check_passes_on_open_store() {
    let store = empty_store().await;
    store.health_check().await.unwrap();
}

// ---------------------------------------------------------------------------
// ListPodcasts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_podcasts_returns_seeded_podcasts_with_author_names() {
    let store = seeded_store().await;

    let podcasts = store.list_podcasts().await.unwrap();
    assert_eq!(podcasts.len(), 3);

    let tech_talk = podcasts
        .iter()
        .find(|p| p.title == "Tech Talk")
        .expect("Tech Talk should be seeded");
    assert_eq!(tech_talk.author_name, "johndoe");

    for podcast in &podcasts {
        let author = UserRepo::find_by_id(store.pool(), podcast.author_id)
            .await
            .unwrap()
            .expect("every podcast author must exist");
        assert_eq!(author.username, podcast.author_name);
    }
}

#[tokio::test]
async fn list_podcasts_orders_by_created_at_descending() {
    let store = seeded_store().await;

    sqlx::query(
        "INSERT INTO podcasts (title, description, author_id, created_at) \
         VALUES ('Night Shift', 'Late night stories.', 2, datetime('now', '+1 day'))",
    )
    .execute(store.pool())
    .await
    .unwrap();

    let podcasts = store.list_podcasts().await.unwrap();
    assert_eq!(podcasts.len(), 4);
    assert_eq!(podcasts[0].title, "Night Shift");
    assert_eq!(podcasts[0].author_name, "janesmith");
    assert_eq!(podcasts[0].cover_image_url, None);
    assert!(podcasts
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn list_podcasts_on_empty_catalog_is_empty() {
    let store = empty_store().await;
    schema::create_tables(store.pool()).await.unwrap();

    let podcasts = store.list_podcasts().await.unwrap();
    assert!(podcasts.is_empty());
}

#[tokio::test]
async fn list_podcasts_fails_on_closed_store() {
    let store = seeded_store().await;
    store.close().await;

    assert_matches!(store.list_podcasts().await, Err(sqlx::Error::PoolClosed));
}

// ---------------------------------------------------------------------------
// GetPodcast
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_podcast_includes_its_episodes_newest_first() {
    let store = seeded_store().await;

    let detail = store
        .get_podcast("1")
        .await
        .unwrap()
        .expect("podcast 1 exists");

    assert_eq!(detail.podcast.id, 1);
    assert_eq!(detail.podcast.title, "Tech Talk");
    assert_eq!(detail.podcast.author_name, "johndoe");
    assert_eq!(detail.episodes.len(), 2);
    assert!(detail.episodes.iter().all(|e| e.podcast_id == 1));
    assert!(detail.episodes[0].published_at > detail.episodes[1].published_at);
    assert_eq!(detail.episodes[0].title, "Databases Demystified");
}

#[tokio::test]
async fn get_podcast_with_single_episode() {
    let store = seeded_store().await;

    let detail = store
        .get_podcast("2")
        .await
        .unwrap()
        .expect("podcast 2 exists");

    assert_eq!(detail.podcast.author_name, "janesmith");
    assert_eq!(detail.episodes.len(), 1);
    assert!(detail.episodes[0].duration > 0);
}

#[tokio::test]
async fn get_podcast_unknown_id_is_none() {
    let store = seeded_store().await;
    assert_matches!(store.get_podcast("9999").await, Ok(None));
}

#[tokio::test]
async fn get_podcast_malformed_id_is_none() {
    let store = seeded_store().await;
    assert_matches!(store.get_podcast("not-a-number").await, Ok(None));
}

#[tokio::test]
async fn get_podcast_fails_on_closed_store() {
    let store = seeded_store().await;
    store.close().await;

    assert_matches!(store.get_podcast("1").await, Err(sqlx::Error::PoolClosed));
}

// ---------------------------------------------------------------------------
// Schema constraints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn episode_requires_existing_podcast() {
    let store = seeded_store().await;

    let result = sqlx::query(
        "INSERT INTO episodes (podcast_id, title, description, audio_url, duration) \
         VALUES (9999, 'Orphan', 'No parent.', 'https://example.com/a.mp3', 60)",
    )
    .execute(store.pool())
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[tokio::test]
async fn episode_duration_must_be_positive() {
    let store = seeded_store().await;

    let result = sqlx::query(
        "INSERT INTO episodes (podcast_id, title, description, audio_url, duration) \
         VALUES (1, 'Silent', 'Nothing here.', 'https://example.com/b.mp3', 0)",
    )
    .execute(store.pool())
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[tokio::test]
async fn user_email_is_unique() {
    let store = seeded_store().await;

    let result =
        sqlx::query("INSERT INTO users (username, email) VALUES ('john2', 'john@example.com')")
            .execute(store.pool())
            .await;

    assert_matches!(result, Err(sqlx::Error::Database(_)));
}
