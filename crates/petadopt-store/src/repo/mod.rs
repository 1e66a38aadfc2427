//! Repository layer mapping the domain records onto their tables

pub mod record;
pub mod sqlite_repo;

pub use record::Record;
pub use sqlite_repo::SqliteRepo;
