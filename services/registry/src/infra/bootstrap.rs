use anyhow::Context as _;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use fleet_core::sea_ext::create_table_if_missing;
use fleet_registry_schema::{
    costs, employees, fuel_cards, insurance_companies, insurance_policies, repairs,
    technical_inspections, tire_sets, vehicles, workshops,
};

use crate::config::RegistryConfig;

/// Open the connection pool described by `config`.
pub async fn connect(config: &RegistryConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);
    Database::connect(options)
        .await
        .context("connect to database")
}

/// Create every registry table that does not exist yet.
///
/// Owners are created before the tables that reference them.
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table_if_missing(db, vehicles::Entity).await?;
    create_table_if_missing(db, insurance_companies::Entity).await?;
    create_table_if_missing(db, fuel_cards::Entity).await?;
    create_table_if_missing(db, workshops::Entity).await?;
    create_table_if_missing(db, employees::Entity).await?;
    create_table_if_missing(db, insurance_policies::Entity).await?;
    create_table_if_missing(db, technical_inspections::Entity).await?;
    create_table_if_missing(db, repairs::Entity).await?;
    create_table_if_missing(db, tire_sets::Entity).await?;
    create_table_if_missing(db, costs::Entity).await?;
    info!("registry schema ready");
    Ok(())
}
