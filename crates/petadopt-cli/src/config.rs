//! Runtime configuration
//!
//! Each setting resolves flag, then environment (a `.env` file is loaded
//! first), then default.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use petadopt_store::db::DEFAULT_DB_PATH;
use petadopt_store::StoreConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_POOL_SIZE: usize = 8;

/// Database settings shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// SQLite database file
    #[arg(long = "db", env = "PETADOPT_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Maximum idle connections kept open
    #[arg(long, env = "PETADOPT_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Reject adoptions and payments that reference missing records
    #[arg(
        long,
        env = "PETADOPT_ENFORCE_FOREIGN_KEYS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub enforce_foreign_keys: bool,
}

impl StoreArgs {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.db_path.clone())
            .with_pool_size(self.pool_size.max(1))
            .with_foreign_keys(self.enforce_foreign_keys)
    }
}

/// Settings for `serve`
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Address the HTTP server binds to
    #[arg(long, env = "PETADOPT_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}
