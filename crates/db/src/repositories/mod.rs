//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Reads accept `&DbPool`; inserts accept a `&mut SqliteConnection` so that
//! seeding can run them inside a single transaction.

pub mod episode_repo;
pub mod podcast_repo;
pub mod user_repo;

pub use episode_repo::EpisodeRepo;
pub use podcast_repo::PodcastRepo;
pub use user_repo::UserRepo;
