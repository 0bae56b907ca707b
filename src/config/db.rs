// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Build the bounded PostgreSQL pool handed to PgSchoolStore

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Pool options derived from configuration, without connecting
pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Called once during application startup in main.rs.
/// Every store query acquires a connection for one statement and
/// returns it to the pool when done.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Initializing database pool (max {} connections, idle {}s, lifetime {}s)",
        config.db_max_connections,
        config.db_idle_timeout,
        config.db_max_lifetime
    );

    let pool = pool_options(config).connect(&config.database_url).await?;

    // Fail startup early instead of on the first request
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}
