#![cfg(test)]
use rand::Rng;
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_with_config, ensure_schema};

/// Fresh in-memory database with the parcels table in place.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

pub fn random_client() -> i32 {
    rand::thread_rng().gen_range(1..10_000_000)
}
