//! Database connection management.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::metrics::record_pool_metrics;
use crate::repositories::{PlayRepository, PlaywrightRepository};

/// Schema for the playwrights and plays tables.
const SCHEMA: &str = include_str!("migrations/001_initial.sql");

static INSTANCE: OnceCell<Database> = OnceCell::const_new();

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://plays.db".to_string(),
            max_connections: 1,
            connect_timeout_secs: 10,
        }
    }
}

impl From<&shared::config::DatabaseSettings> for DatabaseConfig {
    fn from(settings: &shared::config::DatabaseSettings) -> Self {
        Self {
            url: settings.url.clone(),
            max_connections: settings.max_connections,
            connect_timeout_secs: settings.connect_timeout_secs,
        }
    }
}

/// Handle to the SQLite store backing the catalog.
///
/// Cloning is cheap; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the store described by `config`, creating the file if needed.
    ///
    /// In-memory URLs get the same never-recycled connections as
    /// [`in_memory`](Self::in_memory).
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs));
        if is_in_memory(&config.url) {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        tracing::info!(url = %config.url, "Opened database");
        record_pool_metrics(&pool);
        Ok(Self { pool })
    }

    /// Opens a private in-memory store.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// the data lives only as long as that connection.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Creates the playwrights and plays tables if they do not exist.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        tracing::debug!("Applied catalog schema");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn playwrights(&self) -> PlaywrightRepository {
        PlaywrightRepository::new(self.pool.clone())
    }

    pub fn plays(&self) -> PlayRepository {
        PlayRepository::new(self.pool.clone())
    }
}

/// True for SQLite URLs whose data lives only as long as the connection.
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Returns the process-wide database handle, connecting on first use.
///
/// Later calls return the same handle and ignore `config`.
pub async fn instance_with(config: &DatabaseConfig) -> Result<&'static Database, sqlx::Error> {
    INSTANCE.get_or_try_init(|| Database::connect(config)).await
}

/// Returns the process-wide database handle, connecting with the loaded
/// configuration on first use.
pub async fn instance() -> anyhow::Result<&'static Database> {
    if let Some(db) = INSTANCE.get() {
        return Ok(db);
    }

    let config = shared::config::Config::load()?;
    let db = instance_with(&DatabaseConfig::from(&config.database)).await?;
    Ok(db)
}
