//! Process-local store. Contents are lost when the process exits.

use async_trait::async_trait;
use lingua_core::error::LinguaError;
use lingua_core::traits::LocaleStore;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory `LocaleStore`.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl LocaleStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, LinguaError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), LinguaError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), LinguaError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len().await, 1);

        store.remove("k").await.unwrap();
        assert!(store.is_empty().await);
        // Removing again is fine.
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_with_entries() {
        let store = MemoryStore::with_entries([("lingua.current_language", "fr")]);
        assert_eq!(
            store.get("lingua.current_language").await.unwrap().as_deref(),
            Some("fr")
        );
    }
}
