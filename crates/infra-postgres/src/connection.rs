// PostgreSQL Connection Pool Setup

use crate::config::DatabaseConfig;
use crate::error::map_sqlx_error;
use lightbnb_core::error::{AppError, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use tracing::info;

/// Create PostgreSQL connection pool from `config`
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let mut options = PgConnectOptions::from_str(&config.url)
        .map_err(|e| AppError::Config(format!("Invalid database URL: {}", e)))?;

    if let Some(timeout) = config.statement_timeout {
        options = options.options([("statement_timeout", timeout.as_millis().to_string())]);
    }

    info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)
}
