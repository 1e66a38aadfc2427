//! Pool-backed entry point used by the HTTP surface
//!
//! Each call checks out one connection, runs one command and hands the
//! connection back when the guard drops. Calls block; async callers run them
//! on the blocking thread pool.

use petadopt_core::FormFields;
use petadopt_store::errors::Result;
use petadopt_store::{ConnectionPool, Record, StoreConfig};

use crate::commands::records;

/// CRUD operations for every record type
#[derive(Clone)]
pub struct CrudService {
    pool: ConnectionPool,
}

impl CrudService {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Open the store described by `config` and bring its schema up to date
    ///
    /// # Errors
    /// Fails when the database cannot be opened or a migration fails.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let pool = ConnectionPool::open(config)?;
        let applied = pool.migrate()?;
        tracing::info!(applied = ?applied, "record store ready");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// # Errors
    /// Propagates store failures.
    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        let conn = self.pool.get()?;
        records::record_list::<R>(&conn)
    }

    /// # Errors
    /// See [`records::record_create`].
    pub fn create<R: Record>(&self, form: &FormFields) -> Result<R::Key> {
        let conn = self.pool.get()?;
        records::record_create::<R>(&conn, form)
    }

    /// # Errors
    /// See [`records::record_get`].
    pub fn get<R: Record>(&self, raw_key: &str) -> Result<R> {
        let conn = self.pool.get()?;
        records::record_get::<R>(&conn, raw_key)
    }

    /// # Errors
    /// See [`records::record_edit`].
    pub fn edit<R: Record>(&self, raw_key: &str, form: &FormFields) -> Result<usize> {
        let conn = self.pool.get()?;
        records::record_edit::<R>(&conn, raw_key, form)
    }

    /// # Errors
    /// See [`records::record_remove`].
    pub fn remove<R: Record>(&self, raw_key: &str) -> Result<usize> {
        let conn = self.pool.get()?;
        records::record_remove::<R>(&conn, raw_key)
    }
}
