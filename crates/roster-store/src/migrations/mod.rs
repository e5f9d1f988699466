//! Schema bootstrap
//!
//! Provides:
//! - Idempotent application of the embedded schema at startup
//! - Checksums recorded per migration and verified on every start

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
