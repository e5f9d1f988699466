//! Database connection management
//!
//! Opens the single connection a session works with. The connection options
//! keep the networked-database vocabulary (`host`, `port`, `user`,
//! `password`, `database`); with the embedded store only `database` is used,
//! as the database file path.

use crate::errors::{connect_error, from_rusqlite, Result};
use roster_core::errors::Step;
use roster_core_types::Sensitive;
use rusqlite::Connection;
use serde::Deserialize;
use std::path::Path;

/// `database` value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Connection parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionOptions {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Sensitive<String>,
    /// Database file path, or `:memory:`
    pub database: String,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: Sensitive::default(),
            database: "employeetracker.db".to_string(),
        }
    }
}

impl ConnectionOptions {
    /// Options for a given database path, other fields at their defaults
    pub fn for_database(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::default()
        }
    }

    /// Whether any server-only setting differs from its default
    pub fn has_server_settings(&self) -> bool {
        let defaults = Self::default();
        self.host != defaults.host
            || self.port != defaults.port
            || self.user != defaults.user
            || !self.password.expose().is_empty()
    }
}

/// Open and configure the connection described by `options`
pub fn connect(options: &ConnectionOptions) -> Result<Connection> {
    tracing::debug!(
        host = %options.host,
        port = options.port,
        user = %options.user,
        password = %options.password,
        database = %options.database,
        "opening store"
    );
    if options.has_server_settings() {
        tracing::warn!(
            host = %options.host,
            "host, port, user and password are not used by the embedded store"
        );
    }

    let conn = if options.database == IN_MEMORY {
        Connection::open_in_memory().map_err(|e| connect_error(IN_MEMORY, e))?
    } else {
        open(&options.database)?
    };
    configure(&conn)?;
    Ok(conn)
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|e| connect_error(&path.display().to_string(), e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(|e| connect_error(IN_MEMORY, e))?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection: foreign keys are enforced
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| from_rusqlite(e).with_step(Step::Connect))?;
    Ok(())
}

/// Close the connection, reporting any error SQLite raises while doing so
pub fn close(conn: Connection) -> Result<()> {
    conn.close()
        .map_err(|(_, e)| from_rusqlite(e).with_step(Step::Connect).with_op("close"))
}
