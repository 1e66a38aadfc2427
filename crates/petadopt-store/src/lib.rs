//! Pet adoption store - SQLite persistence for the four record tables
//!
//! Provides:
//! - Versioned, checksummed schema migrations
//! - Connection configuration and a small connection pool
//! - A generic repository (`SqliteRepo`) addressing records by primary key

pub mod db;
pub mod errors;
pub mod migrations;
pub mod pool;
pub mod repo;

// Re-export key types
pub use db::StoreConfig;
pub use errors::Result;
pub use pool::{ConnectionPool, PooledConnection};
pub use repo::{Record, SqliteRepo};
