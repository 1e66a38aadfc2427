//! Migrate command

use anyhow::Context;
use clap::Args;
use petadopt_store::migrations::applied_migrations;
use petadopt_store::ConnectionPool;

use crate::config::StoreArgs;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn execute(args: MigrateArgs) -> anyhow::Result<()> {
    let config = args.store.store_config();
    let path = config.path.clone();

    let report = tokio::task::spawn_blocking(move || -> petadopt_store::Result<_> {
        let pool = ConnectionPool::open(config)?;
        let newly_applied = pool.migrate()?;
        let conn = pool.get()?;
        let history = applied_migrations(&conn)?;
        Ok((newly_applied, history))
    })
    .await?
    .with_context(|| format!("migrating {}", path.display()))?;

    let (newly_applied, history) = report;
    if newly_applied.is_empty() {
        println!("Schema up to date ({})", path.display());
    } else {
        for id in &newly_applied {
            println!("Applied {}", id);
        }
    }
    println!("{} migration(s) recorded", history.len());
    Ok(())
}
