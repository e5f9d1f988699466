//! Repository layer for the three roster tables
//!
//! `SqliteRepo` owns the write paths and point lookups; `listing` holds the
//! reference lists that feed prompts and the joined listings that feed
//! tables.

pub mod listing;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
