//! Data model: languages, categories, and translation trees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Unique code, at least two characters (e.g. `"en"`).
    pub code: String,
    /// English display name.
    pub name: String,
    /// Name in the language itself.
    pub native_name: String,
    #[serde(default)]
    pub flag: String,
    /// Right-to-left script.
    #[serde(default)]
    pub rtl: bool,
}

impl Language {
    pub fn new(code: &str, name: &str, native_name: &str, flag: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
            flag: flag.to_string(),
            rtl: false,
        }
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }
}

/// A namespace partition of the translation tree (`nav`, `common`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TranslationCategory {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// One node of a translation tree: a string leaf or a nested map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Branch(TranslationTree),
}

impl TranslationNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(s) => Some(s),
            Self::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&TranslationTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(b) => Some(b),
        }
    }
}

impl From<&str> for TranslationNode {
    fn from(s: &str) -> Self {
        Self::Leaf(s.to_string())
    }
}

impl From<String> for TranslationNode {
    fn from(s: String) -> Self {
        Self::Leaf(s)
    }
}

/// Nested key → node map under one category.
pub type TranslationTree = BTreeMap<String, TranslationNode>;

/// Category id → translation tree, for a single language.
pub type Translations = BTreeMap<String, TranslationTree>;

/// Per-language overrides as persisted: language code → translations.
pub type TranslationOverrides = BTreeMap<String, Translations>;

/// A compiled, built-in language entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageData {
    pub meta: Language,
    pub translations: Translations,
}

/// Returns `true` when no category holds any entry.
pub fn is_empty_translations(translations: &Translations) -> bool {
    translations.values().all(|tree| tree.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_json_uses_camel_case() {
        let lang = Language::new("ar", "Arabic", "العربية", "🇸🇦").with_rtl(true);
        let json = serde_json::to_string(&lang).unwrap();
        assert!(json.contains("\"nativeName\":\"العربية\""));
        assert!(json.contains("\"rtl\":true"));

        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lang);
    }

    #[test]
    fn test_language_rtl_defaults_to_false() {
        let json = r#"{"code":"de","name":"German","nativeName":"Deutsch","flag":"🇩🇪"}"#;
        let lang: Language = serde_json::from_str(json).unwrap();
        assert!(!lang.rtl);
    }

    #[test]
    fn test_translation_node_parses_nested_json() {
        let json = r#"{"title":"Services","items":{"web":"Web","mobile":"Mobile"}}"#;
        let tree: TranslationTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree["title"].as_leaf(), Some("Services"));
        let items = tree["items"].as_branch().unwrap();
        assert_eq!(items["mobile"], TranslationNode::from("Mobile"));
    }

    #[test]
    fn test_is_empty_translations() {
        let mut t = Translations::new();
        assert!(is_empty_translations(&t));
        t.insert("common".to_string(), TranslationTree::new());
        assert!(is_empty_translations(&t));
        t.get_mut("common")
            .unwrap()
            .insert("save".to_string(), "Save".into());
        assert!(!is_empty_translations(&t));
    }
}
