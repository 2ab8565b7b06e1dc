//! Shared primitives for the podcast catalog workspace.

pub mod error;
pub mod types;
