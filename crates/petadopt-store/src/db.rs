//! Database connection management
//!
//! Opening and configuring SQLite connections

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default database file, matching the name the shelter has always used
pub const DEFAULT_DB_PATH: &str = "pet_adoption.db";

/// Store settings applied to every connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    /// Maximum idle connections kept by the pool
    pub pool_size: usize,
    /// Turns on `PRAGMA foreign_keys`; off keeps references advisory
    pub enforce_foreign_keys: bool,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool_size: 8,
            enforce_foreign_keys: false,
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Create the database file's parent directory when missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))
        }
        _ => Ok(()),
    }
}

/// Configure a connection according to `config`
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    // before journal_mode, which needs the write lock on a fresh file
    conn.busy_timeout(config.busy_timeout)
        .map_err(from_rusqlite)?;

    conn.pragma_update(None, "foreign_keys", config.enforce_foreign_keys)
        .map_err(from_rusqlite)?;

    // journal_mode answers with the mode in effect ("memory" for in-memory databases)
    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Open and configure a connection
pub fn connect(config: &StoreConfig) -> Result<Connection> {
    let conn = open(&config.path)?;
    configure(&conn, config)?;
    Ok(conn)
}
