//! Locale manager — current language, language list, categories, and the
//! active translation tree, kept in sync with a `LocaleStore`.
//!
//! Split into focused submodules:
//! - `persist` — store keys and JSON (de)serialization of persisted state
//! - `mutations` — language switching and runtime add/remove operations
//!
//! The manager assumes a single logical owner. Mutations take `&mut self`,
//! so writes to the store are serialized by construction.

mod mutations;
mod persist;


use lingua_core::config::Config;
use lingua_core::env::normalize_language_code;
use lingua_core::error::{ErrorState, LinguaError};
use lingua_core::resolve::{resolve, Params};
use lingua_core::traits::LocaleStore;
use lingua_core::tree::merge_translations;
use lingua_core::types::{
    is_empty_translations, Language, TranslationCategory, TranslationOverrides, Translations,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog::Catalog;
use persist::StoreKeys;

/// Lifecycle phase of a [`LocaleManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
    /// Initialization could not load the chosen language. The manager is
    /// still usable and serves the fallback language.
    Failed,
}

/// Manager settings.
#[derive(Debug, Clone)]
pub struct ManagerOptions {
    pub default_language: String,
    pub fallback_language: String,
    /// Persist the current-language choice.
    pub persist: bool,
    pub key_prefix: String,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            fallback_language: "en".to_string(),
            persist: true,
            key_prefix: "lingua".to_string(),
        }
    }
}

impl ManagerOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_language: config.lingua.default_language.clone(),
            fallback_language: config.lingua.fallback_language.clone(),
            persist: config.lingua.persist,
            key_prefix: config.store.key_prefix.clone(),
        }
    }
}

/// Runtime locale state.
pub struct LocaleManager {
    store: Arc<dyn LocaleStore>,
    catalog: Catalog,
    options: ManagerOptions,
    keys: StoreKeys,
    phase: Phase,
    current_language: String,
    available_languages: Vec<Language>,
    categories: Vec<TranslationCategory>,
    translations: Translations,
    error: Option<ErrorState>,
}

impl LocaleManager {
    /// Create a manager over `store`. Call [`initialize`](Self::initialize)
    /// before use to pick up persisted state.
    pub fn new(store: Arc<dyn LocaleStore>, catalog: Catalog, options: ManagerOptions) -> Self {
        let keys = StoreKeys::new(&options.key_prefix);
        let translations = catalog
            .translations(&options.default_language)
            .cloned()
            .unwrap_or_default();
        Self {
            store,
            keys,
            phase: Phase::Uninitialized,
            current_language: options.default_language.clone(),
            available_languages: catalog.languages(),
            categories: catalog.categories().to_vec(),
            translations,
            error: None,
            catalog,
            options,
        }
    }

    /// Load persisted custom languages and overrides, then choose the active
    /// language: persisted choice, then `preferred`, then the default.
    ///
    /// Never fails. Store errors are logged and treated as "nothing
    /// persisted"; a language whose translations cannot be loaded is replaced
    /// by the fallback language and recorded as an initialization failure.
    pub async fn initialize(&mut self, preferred: Option<&str>) {
        self.phase = Phase::Loading;
        self.error = None;

        let custom = self.read_custom_languages().await.unwrap_or_else(|e| {
            warn!("locale: ignoring unreadable custom languages: {e}");
            BTreeMap::new()
        });
        let overrides = self.read_overrides().await.unwrap_or_else(|e| {
            warn!("locale: ignoring unreadable translation overrides: {e}");
            TranslationOverrides::new()
        });

        self.available_languages = self.catalog.languages();
        for (code, lang) in custom {
            if code != lang.code || self.is_supported(&code) {
                warn!("locale: skipping persisted custom language '{code}'");
                continue;
            }
            self.available_languages.push(lang);
        }

        let custom_categories = self.read_custom_categories().await.unwrap_or_else(|e| {
            warn!("locale: ignoring unreadable custom categories: {e}");
            Vec::new()
        });

        self.categories = self.catalog.categories().to_vec();
        for category in custom_categories {
            if self.categories.iter().any(|c| c.id == category.id) {
                warn!("locale: skipping persisted category '{}'", category.id);
                continue;
            }
            self.categories.push(category);
        }
        // Categories written before the list existed only show up as override keys.
        for translations in overrides.values() {
            for id in translations.keys() {
                if !self.categories.iter().any(|c| &c.id == id) {
                    self.categories.push(TranslationCategory::new(id, id));
                }
            }
        }

        let persisted = self.read_current_language().await.unwrap_or_else(|e| {
            warn!("locale: ignoring unreadable language choice: {e}");
            None
        });
        let chosen = self.choose_language(persisted.as_deref(), preferred);

        match self.load_translations(&chosen, &overrides) {
            Some(translations) => {
                self.current_language = chosen;
                self.translations = translations;
                self.phase = Phase::Ready;
            }
            None => {
                let err = LinguaError::InitializationFailure(format!(
                    "no translations for '{chosen}', using '{}'",
                    self.options.fallback_language
                ));
                warn!("locale: {err}");
                self.error = Some(ErrorState::from(&err));
                self.current_language = self.options.fallback_language.clone();
                self.translations = self
                    .catalog
                    .translations(&self.options.fallback_language)
                    .cloned()
                    .unwrap_or_default();
                self.phase = Phase::Failed;
            }
        }

        if self.options.persist {
            let code = self.current_language.clone();
            if let Err(e) = self.write_current_language(&code).await {
                warn!("locale: failed to persist language choice: {e}");
            }
        }

        info!(
            "locale: initialized with '{}' ({} languages, {} categories)",
            self.current_language,
            self.available_languages.len(),
            self.categories.len()
        );
    }

    fn choose_language(&self, persisted: Option<&str>, preferred: Option<&str>) -> String {
        if let Some(code) = persisted.filter(|c| self.is_supported(c)) {
            return code.to_string();
        }
        if let Some(code) = preferred
            .map(normalize_language_code)
            .filter(|c| self.is_supported(c))
        {
            return code;
        }
        self.options.default_language.clone()
    }

    /// Catalog entry for `code` with its persisted overrides merged on top.
    /// `None` if the merged result holds no entries.
    fn load_translations(&self, code: &str, overrides: &TranslationOverrides) -> Option<Translations> {
        let base = self.catalog.translations(code).cloned().unwrap_or_default();
        let merged = match overrides.get(code) {
            Some(custom) => merge_translations(&base, custom),
            None => base,
        };
        if is_empty_translations(&merged) {
            None
        } else {
            Some(merged)
        }
    }

    /// Merged translations for any available language, without switching.
    pub async fn translations_for(&self, code: &str) -> Result<Translations, LinguaError> {
        if !self.is_supported(code) {
            return Err(LinguaError::UnsupportedLanguage(code.to_string()));
        }
        let overrides = self.read_overrides().await?;
        self.load_translations(code, &overrides)
            .ok_or_else(|| LinguaError::TranslationsNotFound(code.to_string()))
    }

    /// Resolve `key` in `category` against the active language, falling
    /// back to the fallback language's built-in entry.
    pub fn t(&self, key: &str, category: &str, params: Option<&Params>) -> String {
        resolve(
            &self.translations,
            self.fallback_translations(),
            category,
            key,
            params,
        )
    }

    /// Built-in translations of the fallback language.
    pub fn fallback_translations(&self) -> Option<&Translations> {
        self.catalog.translations(&self.options.fallback_language)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.available_languages.iter().any(|l| l.code == code)
    }

    pub fn language(&self, code: &str) -> Option<&Language> {
        self.available_languages.iter().find(|l| l.code == code)
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    pub fn current_language_meta(&self) -> Option<&Language> {
        self.language(&self.current_language)
    }

    /// Whether the active language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.current_language_meta().is_some_and(|l| l.rtl)
    }

    pub fn available_languages(&self) -> &[Language] {
        &self.available_languages
    }

    pub fn categories(&self) -> &[TranslationCategory] {
        &self.categories
    }

    /// The active language's resolved tree.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Last recorded failure, if any.
    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    /// Name of the backing store.
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Mirror a failed mutation into the queryable error state.
    fn record<T>(&mut self, result: Result<T, LinguaError>) -> Result<T, LinguaError> {
        if let Err(err) = &result {
            warn!("locale: {err}");
            self.error = Some(ErrorState::from(err));
        }
        result
    }
}
