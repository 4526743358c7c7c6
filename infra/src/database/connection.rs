//! Database connection pool management

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use cs_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration settings
///
/// # Returns
/// * `Ok(MySqlPool)` - Connected pool
/// * `Err(sqlx::Error)` - Connection failed
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;

    info!(
        "Database pool created (max_connections={})",
        config.max_connections
    );

    Ok(pool)
}
