//! SQLite-backed locale store.
//!
//! A single key-value table, versioned through a `_migrations` table so
//! later schema changes can be applied in place.


use async_trait::async_trait;
use lingua_core::{config::StoreConfig, error::LinguaError, shellexpand, traits::LocaleStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Persistent locale store backed by SQLite.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `config.db_path` and run migrations.
    pub async fn new(config: &StoreConfig) -> Result<Self, LinguaError> {
        let db_path = shellexpand(&config.db_path);

        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| LinguaError::Store(format!("failed to create data dir: {e}")))?;
            }
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| LinguaError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(opts)
            .await
            .map_err(|e| LinguaError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Locale store initialized at {db_path}");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All stored keys, sorted.
    pub async fn keys(&self) -> Result<Vec<String>, LinguaError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT key FROM locale_kv ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| LinguaError::Store(format!("query failed: {e}")))?;
        Ok(rows.into_iter().map(|(k,)| k).collect())
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), LinguaError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| LinguaError::Store(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] =
            &[("001_init", include_str!("../../migrations/001_init.sql"))];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        LinguaError::Store(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| LinguaError::Store(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    LinguaError::Store(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl LocaleStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, LinguaError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM locale_kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| LinguaError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), LinguaError> {
        sqlx::query(
            "INSERT INTO locale_kv (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| LinguaError::Store(format!("upsert failed: {e}")))?;

        debug!("store: set {key} ({} bytes)", value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), LinguaError> {
        sqlx::query("DELETE FROM locale_kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| LinguaError::Store(format!("delete failed: {e}")))?;

        Ok(())
    }
}
