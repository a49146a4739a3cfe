use anyhow::Context as _;
use sea_orm::ConnectionTrait as _;
use tracing::info;

use fleet_core::config::Config as _;
use fleet_core::tracing::init_tracing;
use fleet_registry::config::RegistryConfig;
use fleet_registry::infra::bootstrap::{connect, create_schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RegistryConfig::from_env().context("load registry configuration")?;
    init_tracing(config.log_format);

    let db = connect(&config).await?;
    create_schema(&db).await.context("create registry schema")?;

    info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "fleet registry ready"
    );
    Ok(())
}
