//! Language switching and runtime add/remove operations.
//!
//! Every public operation clears the previous error, runs its checks, writes
//! the store, and only then updates in-memory state. Failures are returned
//! to the caller and mirrored into [`LocaleManager::error`].

use super::LocaleManager;
use lingua_core::error::LinguaError;
use lingua_core::tree::{
    get_nested_value, merge_translations, remove_nested_value, set_nested_value,
};
use lingua_core::types::{Language, TranslationCategory, TranslationNode, Translations};
use lingua_core::validate::validate_language;
use tracing::info;

impl LocaleManager {
    /// Switch the active language.
    ///
    /// Fails with `UnsupportedLanguage` for unknown codes and
    /// `TranslationsNotFound` when the merged tree would be empty. State is
    /// unchanged on failure.
    pub async fn set_language(&mut self, code: &str) -> Result<(), LinguaError> {
        self.error = None;
        let result = self.try_set_language(code).await;
        self.record(result)
    }

    async fn try_set_language(&mut self, code: &str) -> Result<(), LinguaError> {
        if !self.is_supported(code) {
            return Err(LinguaError::UnsupportedLanguage(code.to_string()));
        }
        let overrides = self.read_overrides().await?;
        let translations = self
            .load_translations(code, &overrides)
            .ok_or_else(|| LinguaError::TranslationsNotFound(code.to_string()))?;
        if self.options.persist {
            self.write_current_language(code).await?;
        }
        self.current_language = code.to_string();
        self.translations = translations;
        info!("locale: switched to '{code}'");
        Ok(())
    }

    /// Register a custom language with its translations. Does not switch to it.
    pub async fn add_language(
        &mut self,
        language: Language,
        translations: Translations,
    ) -> Result<(), LinguaError> {
        self.error = None;
        let result = self.try_add_language(language, translations).await;
        self.record(result)
    }

    async fn try_add_language(
        &mut self,
        language: Language,
        translations: Translations,
    ) -> Result<(), LinguaError> {
        validate_language(&language)?;
        if self.is_supported(&language.code) {
            return Err(LinguaError::DuplicateLanguage(language.code));
        }

        let mut custom = self.read_custom_languages().await?;
        custom.insert(language.code.clone(), language.clone());
        let mut overrides = self.read_overrides().await?;
        overrides.insert(language.code.clone(), translations);

        // Overrides first: an orphaned override entry is inert, a language
        // without translations is not.
        self.write_overrides(&overrides).await?;
        self.write_custom_languages(&custom).await?;

        info!("locale: added language '{}' ({})", language.code, language.name);
        self.available_languages.push(language);
        Ok(())
    }

    /// Write `value` at `category`/`key` for `language` (default: the active one).
    ///
    /// The override is always persisted; the in-memory tree is only touched
    /// when `language` is active. Repeating an identical write is a no-op.
    pub async fn add_translation(
        &mut self,
        category: &str,
        key: &str,
        value: &str,
        language: Option<&str>,
    ) -> Result<(), LinguaError> {
        self.error = None;
        let result = self.try_add_translation(category, key, value, language).await;
        self.record(result)
    }

    async fn try_add_translation(
        &mut self,
        category: &str,
        key: &str,
        value: &str,
        language: Option<&str>,
    ) -> Result<(), LinguaError> {
        let code = language.unwrap_or(&self.current_language).to_string();
        if !self.is_supported(&code) {
            return Err(LinguaError::UnsupportedLanguage(code));
        }

        let mut overrides = self.read_overrides().await?;
        let tree = overrides
            .entry(code.clone())
            .or_default()
            .entry(category.to_string())
            .or_default();
        let unchanged = matches!(
            get_nested_value(tree, key),
            Some(TranslationNode::Leaf(existing)) if existing == value
        );
        if !unchanged {
            set_nested_value(tree, key, value);
            self.write_overrides(&overrides).await?;
            info!("locale: set {code}:{category}.{key}");
        }

        if code == self.current_language {
            set_nested_value(
                self.translations.entry(category.to_string()).or_default(),
                key,
                value,
            );
        }
        Ok(())
    }

    /// Register and persist a new category, giving every persisted language an
    /// empty tree for it so later writes have a parent to land in.
    pub async fn add_category(&mut self, category: TranslationCategory) -> Result<(), LinguaError> {
        self.error = None;
        let result = self.try_add_category(category).await;
        self.record(result)
    }

    async fn try_add_category(&mut self, category: TranslationCategory) -> Result<(), LinguaError> {
        if self.categories.iter().any(|c| c.id == category.id) {
            return Err(LinguaError::DuplicateCategory(category.id));
        }

        let mut custom = self.read_custom_categories().await?;
        custom.retain(|c| c.id != category.id);
        custom.push(category.clone());
        self.write_custom_categories(&custom).await?;

        let mut overrides = self.read_overrides().await?;
        for translations in overrides.values_mut() {
            translations.entry(category.id.clone()).or_default();
        }
        self.write_overrides(&overrides).await?;

        info!("locale: added category '{}'", category.id);
        self.translations.entry(category.id.clone()).or_default();
        self.categories.push(category);
        Ok(())
    }

    /// Remove a custom language and its overrides. If it was active, the
    /// default language takes over.
    pub async fn remove_language(&mut self, code: &str) -> Result<(), LinguaError> {
        self.error = None;
        let result = self.try_remove_language(code).await;
        self.record(result)
    }

    async fn try_remove_language(&mut self, code: &str) -> Result<(), LinguaError> {
        if !self.is_supported(code) {
            return Err(LinguaError::UnsupportedLanguage(code.to_string()));
        }
        if self.catalog.contains(code) {
            return Err(LinguaError::BuiltinLanguage(code.to_string()));
        }

        let mut custom = self.read_custom_languages().await?;
        custom.remove(code);
        let mut overrides = self.read_overrides().await?;
        overrides.remove(code);

        let replacement = if self.current_language == code {
            let default = self.options.default_language.clone();
            match self.load_translations(&default, &overrides) {
                Some(translations) => Some((default, translations)),
                None => Some((
                    self.options.fallback_language.clone(),
                    self.fallback_translations().cloned().unwrap_or_default(),
                )),
            }
        } else {
            None
        };

        self.write_custom_languages(&custom).await?;
        self.write_overrides(&overrides).await?;
        if let Some((next, _)) = &replacement {
            if self.options.persist {
                self.write_current_language(next).await?;
            }
        }

        self.available_languages.retain(|l| l.code != code);
        if let Some((next, translations)) = replacement {
            info!("locale: active language '{code}' removed, switched to '{next}'");
            self.current_language = next;
            self.translations = translations;
        }
        info!("locale: removed language '{code}'");
        Ok(())
    }

    /// Remove a runtime-added category from memory and from every language
    /// in the override store.
    pub async fn remove_category(&mut self, id: &str) -> Result<(), LinguaError> {
        self.error = None;
        let result = self.try_remove_category(id).await;
        self.record(result)
    }

    async fn try_remove_category(&mut self, id: &str) -> Result<(), LinguaError> {
        if !self.categories.iter().any(|c| c.id == id) {
            return Err(LinguaError::UnknownCategory(id.to_string()));
        }
        if self.catalog.has_category(id) {
            return Err(LinguaError::BuiltinCategory(id.to_string()));
        }

        let mut overrides = self.read_overrides().await?;
        for translations in overrides.values_mut() {
            translations.remove(id);
        }
        self.write_overrides(&overrides).await?;
        // Removed after the overrides so leftover trees never bring it back
        // under a bare id.
        let mut custom = self.read_custom_categories().await?;
        custom.retain(|c| c.id != id);
        self.write_custom_categories(&custom).await?;

        self.categories.retain(|c| c.id != id);
        self.translations.remove(id);
        info!("locale: removed category '{id}'");
        Ok(())
    }

    /// Remove a persisted override. When `language` is active, the tree is
    /// rebuilt so any built-in value shows through again. Returns whether an
    /// override existed.
    pub async fn remove_translation(
        &mut self,
        category: &str,
        key: &str,
        language: Option<&str>,
    ) -> Result<bool, LinguaError> {
        self.error = None;
        let result = self.try_remove_translation(category, key, language).await;
        self.record(result)
    }

    async fn try_remove_translation(
        &mut self,
        category: &str,
        key: &str,
        language: Option<&str>,
    ) -> Result<bool, LinguaError> {
        let code = language.unwrap_or(&self.current_language).to_string();
        if !self.is_supported(&code) {
            return Err(LinguaError::UnsupportedLanguage(code));
        }

        let mut overrides = self.read_overrides().await?;
        let removed = overrides
            .get_mut(&code)
            .and_then(|t| t.get_mut(category))
            .is_some_and(|tree| remove_nested_value(tree, key));
        if !removed {
            return Ok(false);
        }
        self.write_overrides(&overrides).await?;

        if code == self.current_language {
            let base = self.catalog.translations(&code).cloned().unwrap_or_default();
            self.translations = match overrides.get(&code) {
                Some(custom) => merge_translations(&base, custom),
                None => base,
            };
        }
        info!("locale: removed {code}:{category}.{key}");
        Ok(true)
    }
}
