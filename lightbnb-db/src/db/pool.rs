//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. When every connection
//! is busy, further queries wait for one to free up (bounded by the
//! configured acquire timeout).

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;
use crate::error::Result;

/// Create a PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the configuration is unusable or the first
/// connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool> {
    let options = config.connect_options()?;
    tracing::debug!(
        db = %config.target(),
        max_connections = config.max_connections,
        "opening connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await?;
    Ok(pool)
}
