//! Database connection management

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::config::DatabaseConfig;

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}
