//! Serve command

use anyhow::Context;
use clap::Args;
use petadopt_service::CrudService;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: AppConfig,
}

pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.config;
    let store_config = config.store.store_config();
    let path = store_config.path.clone();

    let service = tokio::task::spawn_blocking(move || CrudService::open(store_config))
        .await?
        .with_context(|| format!("opening database {}", path.display()))?;

    tracing::info!(
        db = %path.display(),
        enforce_foreign_keys = config.store.enforce_foreign_keys,
        "database ready"
    );

    let app = petadopt_web::create_app(service);
    petadopt_web::run_server(app, config.bind).await
}
