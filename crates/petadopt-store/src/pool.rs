//! Connection pool
//!
//! Connections are opened lazily and configured once. A `PooledConnection`
//! guard hands its connection back when dropped, whatever path the caller
//! leaves by. At most `pool_size` idle connections are retained.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::db::{self, StoreConfig};
use crate::errors::Result;
use crate::migrations;

struct PoolInner {
    config: StoreConfig,
    idle: Mutex<Vec<Connection>>,
}

impl PoolInner {
    fn idle(&self) -> MutexGuard<'_, Vec<Connection>> {
        // A panic while holding the lock cannot leave the Vec half-updated
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Shared handle to the store's connections
#[derive(Clone)]
pub struct ConnectionPool {
    inner: Arc<PoolInner>,
}

impl ConnectionPool {
    /// Create a pool for `config`, opening one connection to fail fast on a bad path
    pub fn open(config: StoreConfig) -> Result<Self> {
        db::ensure_parent_dir(&config.path)?;
        let first = db::connect(&config)?;
        tracing::debug!(
            path = %config.path.display(),
            pool_size = config.pool_size,
            enforce_foreign_keys = config.enforce_foreign_keys,
            "connection pool opened"
        );
        Ok(Self {
            inner: Arc::new(PoolInner {
                config,
                idle: Mutex::new(vec![first]),
            }),
        })
    }

    /// Check out a connection, opening a new one when none is idle
    pub fn get(&self) -> Result<PooledConnection> {
        let reused = self.inner.idle().pop();
        let conn = match reused {
            Some(conn) => conn,
            None => db::connect(&self.inner.config)?,
        };
        Ok(PooledConnection {
            conn: Some(conn),
            pool: Arc::clone(&self.inner),
        })
    }

    /// Apply pending migrations using a pooled connection
    pub fn migrate(&self) -> Result<Vec<&'static str>> {
        let mut conn = self.get()?;
        migrations::apply_migrations(&mut conn)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Number of connections currently parked in the pool
    pub fn idle_count(&self) -> usize {
        self.inner.idle().len()
    }
}

/// A checked-out connection; returns to the pool on drop
pub struct PooledConnection {
    conn: Option<Connection>,
    pool: Arc<PoolInner>,
}

impl Deref for PooledConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        // Only `drop` takes the connection out
        self.conn.as_ref().expect("pooled connection present until drop")
    }
}

impl DerefMut for PooledConnection {
    fn deref_mut(&mut self) -> &mut Connection {
        self.conn.as_mut().expect("pooled connection present until drop")
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            let mut idle = self.pool.idle();
            if idle.len() < self.pool.config.pool_size {
                idle.push(conn);
            }
        }
    }
}
