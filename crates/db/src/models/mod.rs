//! Domain model structs and DTOs.
//!
//! Each entity has a `FromRow` + `Serialize` struct matching the row it is
//! read from, plus a create DTO used by seeding.

pub mod episode;
pub mod podcast;
pub mod user;
