use crate::error::LinguaError;
use async_trait::async_trait;

/// Persistent key-value store the locale manager reads and writes through.
///
/// Values are opaque strings; the manager stores JSON. Each `set` fully
/// replaces the previous value, so callers serialize their own writes.
#[async_trait]
pub trait LocaleStore: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Read a value. `Ok(None)` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, LinguaError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), LinguaError>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), LinguaError>;
}
