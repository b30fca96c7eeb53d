//! Store keys and JSON (de)serialization of persisted locale state.

use super::LocaleManager;
use lingua_core::error::LinguaError;
use lingua_core::types::{Language, TranslationCategory, TranslationOverrides};
use std::collections::BTreeMap;

/// The keys the manager owns in the store.
#[derive(Debug, Clone)]
pub(crate) struct StoreKeys {
    pub current_language: String,
    pub custom_languages: String,
    pub custom_translations: String,
    pub custom_categories: String,
}

impl StoreKeys {
    pub fn new(prefix: &str) -> Self {
        Self {
            current_language: format!("{prefix}.current_language"),
            custom_languages: format!("{prefix}.custom_languages"),
            custom_translations: format!("{prefix}.custom_translations"),
            custom_categories: format!("{prefix}.custom_categories"),
        }
    }
}

impl LocaleManager {
    pub(super) async fn read_current_language(&self) -> Result<Option<String>, LinguaError> {
        Ok(self
            .store
            .get(&self.keys.current_language)
            .await?
            .filter(|code| !code.trim().is_empty()))
    }

    pub(super) async fn write_current_language(&self, code: &str) -> Result<(), LinguaError> {
        self.store.set(&self.keys.current_language, code).await
    }

    /// Custom languages keyed by code.
    pub(super) async fn read_custom_languages(
        &self,
    ) -> Result<BTreeMap<String, Language>, LinguaError> {
        match self.store.get(&self.keys.custom_languages).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(BTreeMap::new()),
        }
    }

    pub(super) async fn write_custom_languages(
        &self,
        languages: &BTreeMap<String, Language>,
    ) -> Result<(), LinguaError> {
        let json = serde_json::to_string(languages)?;
        self.store.set(&self.keys.custom_languages, &json).await
    }

    /// Per-language overrides: code → category → nested keys.
    pub(super) async fn read_overrides(&self) -> Result<TranslationOverrides, LinguaError> {
        match self.store.get(&self.keys.custom_translations).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(TranslationOverrides::new()),
        }
    }

    pub(super) async fn write_overrides(
        &self,
        overrides: &TranslationOverrides,
    ) -> Result<(), LinguaError> {
        let json = serde_json::to_string(overrides)?;
        self.store.set(&self.keys.custom_translations, &json).await
    }

    /// Runtime-added categories, in registration order.
    pub(super) async fn read_custom_categories(
        &self,
    ) -> Result<Vec<TranslationCategory>, LinguaError> {
        match self.store.get(&self.keys.custom_categories).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub(super) async fn write_custom_categories(
        &self,
        categories: &[TranslationCategory],
    ) -> Result<(), LinguaError> {
        let json = serde_json::to_string(categories)?;
        self.store.set(&self.keys.custom_categories, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keys_use_prefix() {
        let keys = StoreKeys::new("site");
        assert_eq!(keys.current_language, "site.current_language");
        assert_eq!(keys.custom_languages, "site.custom_languages");
        assert_eq!(keys.custom_translations, "site.custom_translations");
        assert_eq!(keys.custom_categories, "site.custom_categories");
    }
}
