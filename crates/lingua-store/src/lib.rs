//! # lingua-store
//!
//! `LocaleStore` backends for Lingua: SQLite on disk, or an in-memory map.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use lingua_core::config::{StoreBackend, StoreConfig};
use lingua_core::error::LinguaError;
use lingua_core::traits::LocaleStore;
use std::sync::Arc;

/// Build the configured store backend.
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn LocaleStore>, LinguaError> {
    match config.backend {
        StoreBackend::Sqlite => Ok(Arc::new(SqliteStore::new(config).await?)),
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
