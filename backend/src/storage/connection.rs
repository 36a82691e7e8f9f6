use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// DbConnection owns the SQLite pool shared by every repository
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Build a pool without opening a connection yet.
    ///
    /// Only a malformed URL fails here; an unreachable database surfaces on
    /// first use, so the server can start without it.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_lazy_with(options);
        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a private in-memory database for tests
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let conn = Self { pool: Arc::new(pool) };
        conn.bootstrap().await?;
        Ok(conn)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check the database answers, then make sure the tables exist
    pub async fn bootstrap(&self) -> Result<()> {
        let now: String = sqlx::query_scalar("SELECT datetime('now')")
            .fetch_one(self.pool())
            .await
            .context("Database connection probe failed")?;
        info!(server_time = %now, "SQLite connected successfully");

        Self::setup_schema(self.pool()).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS daily_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL UNIQUE,
                aaj_ka_anand_price REAL NOT NULL DEFAULT 0 CHECK (aaj_ka_anand_price >= 0),
                times_of_india_price REAL NOT NULL DEFAULT 0 CHECK (times_of_india_price >= 0),
                total_daily_price REAL NOT NULL DEFAULT 0
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create daily_entries table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS newspapers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                price REAL NOT NULL DEFAULT 0
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create newspapers table")?;

        Ok(())
    }
}
