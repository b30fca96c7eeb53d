//! Built-in catalog — languages and translation trees compiled into the binary.
//!
//! Supported languages: English (fallback), French, Spanish, Chinese.
//! The Chinese entry is partial for some service details; those keys are
//! served from the fallback language at resolution time.


use lingua_core::error::LinguaError;
use lingua_core::types::{Language, LanguageData, TranslationCategory, Translations};

/// Embedded sources, in display order.
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("locales/en.json")),
    ("fr", include_str!("locales/fr.json")),
    ("es", include_str!("locales/es.json")),
    ("zh", include_str!("locales/zh.json")),
];

/// Built-in categories: `(id, name, description)`.
const BUILTIN_CATEGORIES: &[(&str, &str, &str)] = &[
    ("nav", "Navigation", "Header and menu labels"),
    ("common", "Common", "Shared buttons and short phrases"),
    ("hero", "Hero", "Landing page headline block"),
    ("services", "Services", "Service cards and feature lists"),
    ("contact", "Contact", "Contact form labels and messages"),
    ("footer", "Footer", "Footer links and legal text"),
];

/// Immutable set of built-in languages and their translations.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<LanguageData>,
    categories: Vec<TranslationCategory>,
}

impl Catalog {
    /// Parse the embedded catalog.
    pub fn builtin() -> Result<Self, LinguaError> {
        let mut entries = Vec::with_capacity(BUILTIN_SOURCES.len());
        for (code, source) in BUILTIN_SOURCES {
            let data: LanguageData = serde_json::from_str(source)?;
            if data.meta.code != *code {
                return Err(LinguaError::InitializationFailure(format!(
                    "catalog entry '{code}' declares code '{}'",
                    data.meta.code
                )));
            }
            entries.push(data);
        }
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(id, name, description)| {
                TranslationCategory::new(id, name).with_description(description)
            })
            .collect();
        Ok(Self {
            entries,
            categories,
        })
    }

    /// Build a catalog from explicit entries.
    pub fn from_entries(entries: Vec<LanguageData>, categories: Vec<TranslationCategory>) -> Self {
        Self {
            entries,
            categories,
        }
    }

    /// Built-in language metadata, in catalog order.
    pub fn languages(&self) -> Vec<Language> {
        self.entries.iter().map(|e| e.meta.clone()).collect()
    }

    pub fn categories(&self) -> &[TranslationCategory] {
        &self.categories
    }

    pub fn get(&self, code: &str) -> Option<&LanguageData> {
        self.entries.iter().find(|e| e.meta.code == code)
    }

    pub fn translations(&self, code: &str) -> Option<&Translations> {
        self.get(code).map(|e| &e.translations)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}
