use std::time::Duration;

use anyhow::Context;
use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

use crate::parcel;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt)
        .await
        .context("failed to connect to database")?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// Create the `parcels` table and its indexes from the entity definition.
/// Safe to call on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(parcel::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table))
        .await
        .context("failed to create parcels table")?;

    for mut index in schema.create_index_from_entity(parcel::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index))
            .await
            .context("failed to create parcels index")?;
    }

    debug!("parcels schema ready");
    Ok(())
}
