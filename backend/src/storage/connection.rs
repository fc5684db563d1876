use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Connect to `url`, creating the database file and schema if needed
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database url: {}", url))?
            .create_if_missing(true);

        // An in-memory database lives only as long as its connection, so
        // keep exactly one and never recycle it.
        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", url))?;

        Self::setup_schema(&pool).await?;
        info!("Database ready at {}", url);

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize a fresh, private in-memory database
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        Self::new("sqlite::memory:").await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS teachers (
                id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL,
                date_of_birth TEXT NOT NULL,
                age INTEGER NOT NULL,
                number_of_classes INTEGER NOT NULL CHECK (number_of_classes >= 0),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:roster?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:roster.db"));
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        DbConnection::setup_schema(db.pool())
            .await
            .expect("Schema setup should be repeatable");
    }
}
