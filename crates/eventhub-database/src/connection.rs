//! PostgreSQL pool lifecycle.

use sqlx::postgres::PgPool;
use tracing::info;

use eventhub_core::config::DatabaseConfig;
use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;

/// Owns the sqlx pool the repositories share.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
    redacted_url: String,
}

impl DatabasePool {
    /// Open a pool sized from `config` and verify it answers.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let redacted_url = config.redacted_url();
        info!(
            url = %redacted_url,
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = config
            .pool_options()
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to {redacted_url}"),
                    e,
                )
            })?;

        let db = Self { pool, redacted_url };
        db.ping().await?;
        info!(url = %db.redacted_url, "PostgreSQL ready");
        Ok(db)
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close all connections, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
        info!(url = %self.redacted_url, "Database pool closed");
    }
}
