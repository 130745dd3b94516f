use crate::config::DatabaseConfig;
use crate::error::AppResult;
use migration::SchemaProfile;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let pool = Database::connect(options).await?;
    log::info!(
        "Database connected (backend: {:?}, max_connections: {})",
        pool.get_database_backend(),
        config.max_connections
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool, profile: SchemaProfile) -> AppResult<()> {
    let pending = migration::pending_migrations(pool, profile).await?;
    if !pending.is_empty() {
        log::info!(
            "Applying {} migration(s) with schema profile {}",
            pending.len(),
            profile
        );
    }
    migration::migrate_up(pool, profile).await?;
    Ok(())
}

pub async fn ping(pool: &DbPool) -> AppResult<()> {
    pool.ping().await?;
    Ok(())
}
