//! Roster Store - the data store gateway
//!
//! Provides:
//! - Connection handling for the embedded SQLite store
//! - Idempotent schema bootstrap with recorded checksums
//! - Parameterized inserts and the single update path (`SqliteRepo`)
//! - Reference lists and the joined/aggregated listings (`repo::listing`)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::ConnectionOptions;
pub use errors::Result;
pub use repo::SqliteRepo;
