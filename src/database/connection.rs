use crate::config::DatabaseConfig;
use crate::error::AppResult;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

pub type DbPool = MySqlPool;

/// Lazy pool: nothing connects until the first insert, so a down store
/// surfaces at write time where it is logged and suppressed, never at
/// startup.
pub fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(&config.url())?;

    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
