//! Resolution engine: category + dot-path lookup, fallback, interpolation.
//!
//! Read-path failures never surface as errors. A missing category or key
//! degrades to the raw key path so that it shows up visibly in rendered UI.

use std::collections::BTreeMap;
use tracing::debug;

use crate::tree::get_nested_value;
use crate::types::{TranslationNode, Translations};

/// Interpolation parameters for `{{name}}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Accepts strings and numbers alike.
    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl ToString) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Replace every `{{name}}` whose name is present in `params`.
///
/// Single left-to-right pass: substituted values are not rescanned, and
/// placeholders without a matching parameter are kept verbatim.
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        if !is_placeholder_name(name) {
            // Not a placeholder; a real one may still start inside this span.
            out.push('{');
            rest = &rest[start + 1..];
            continue;
        }
        match params.get(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Look up `category`/`key_path` in `translations`, then in `fallback`.
///
/// Returns `None` when the category is absent from `translations` or the key
/// is absent from both sources. The fallback is only consulted once the
/// category itself is known to exist.
pub fn resolve_node(
    translations: &Translations,
    fallback: Option<&Translations>,
    category: &str,
    key_path: &str,
) -> Option<TranslationNode> {
    let tree = translations.get(category)?;
    if let Some(node) = get_nested_value(tree, key_path) {
        return Some(node.clone());
    }
    let node = fallback
        .and_then(|fb| fb.get(category))
        .and_then(|tree| get_nested_value(tree, key_path))?;
    debug!("i18n: '{category}.{key_path}' served from fallback language");
    Some(node.clone())
}

/// Resolve a translation to a display string.
///
/// - Category missing: returns `key_path` unchanged.
/// - Key missing in both the active and fallback trees: returns `key_path`.
/// - Leaf found: interpolated with `params` when supplied.
/// - Branch found: rendered as compact JSON, without interpolation.
pub fn resolve(
    translations: &Translations,
    fallback: Option<&Translations>,
    category: &str,
    key_path: &str,
    params: Option<&Params>,
) -> String {
    if !translations.contains_key(category) {
        debug!("i18n: unknown category '{category}' for key '{key_path}'");
        return key_path.to_string();
    }
    match resolve_node(translations, fallback, category, key_path) {
        Some(TranslationNode::Leaf(text)) => match params {
            Some(p) if !p.is_empty() => interpolate(&text, p),
            _ => text,
        },
        Some(TranslationNode::Branch(tree)) => {
            serde_json::to_string(&tree).unwrap_or_else(|_| key_path.to_string())
        }
        None => {
            debug!("i18n: missing translation '{category}.{key_path}'");
            key_path.to_string()
        }
    }
}

/// Whether the active translations (without fallback) hold `key_path`.
pub fn has_key(translations: &Translations, category: &str, key_path: &str) -> bool {
    translations
        .get(category)
        .and_then(|tree| get_nested_value(tree, key_path))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::leaf_paths;

    fn translations(json: &str) -> Translations {
        serde_json::from_str(json).unwrap()
    }

    fn english() -> Translations {
        translations(
            r#"{
                "common": { "save": "Save", "greeting": "Hello {{name}}" },
                "services": { "web": { "title": "Web", "body": "Fast sites" } }
            }"#,
        )
    }

    fn french() -> Translations {
        translations(
            r#"{
                "common": { "save": "Enregistrer" },
                "services": { "web": { "title": "Web" } }
            }"#,
        )
    }

    #[test]
    fn test_every_leaf_resolves_to_itself() {
        let en = english();
        for (category, tree) in &en {
            for path in leaf_paths(tree) {
                let expected = crate::tree::get_nested_value(tree, &path)
                    .and_then(|n| n.as_leaf())
                    .unwrap()
                    .to_string();
                assert_eq!(resolve(&en, None, category, &path, None), expected);
            }
        }
    }

    #[test]
    fn test_missing_category_returns_key() {
        let fr = french();
        assert_eq!(
            resolve(&fr, Some(&english()), "pricing", "plan.free", None),
            "plan.free"
        );
    }

    #[test]
    fn test_missing_key_uses_fallback() {
        let fr = french();
        let en = english();
        assert_eq!(
            resolve(&fr, Some(&en), "services", "web.body", None),
            "Fast sites"
        );
        assert_eq!(resolve(&fr, Some(&en), "common", "save", None), "Enregistrer");
    }

    #[test]
    fn test_missing_everywhere_returns_key_and_is_stable() {
        let fr = french();
        let en = english();
        let first = resolve(&fr, Some(&en), "common", "nope.nothing", None);
        let second = resolve(&fr, Some(&en), "common", "nope.nothing", None);
        assert_eq!(first, "nope.nothing");
        assert_eq!(first, second);
        assert_eq!(fr, french(), "reads must not mutate");
    }

    #[test]
    fn test_fallback_is_interpolated() {
        let fr = french();
        let en = english();
        let params = Params::new().with("name", "Ada");
        assert_eq!(
            resolve(&fr, Some(&en), "common", "greeting", Some(&params)),
            "Hello Ada"
        );
    }

    #[test]
    fn test_interpolate_replaces_known_placeholders() {
        let params = Params::new().with("name", "Ada").with("count", 3);
        assert_eq!(interpolate("Hello {{name}}", &params), "Hello Ada");
        assert_eq!(
            interpolate("{{name}} has {{count}} projects", &params),
            "Ada has 3 projects"
        );
    }

    #[test]
    fn test_interpolate_keeps_unmatched_placeholders() {
        let params = Params::new().with("other", "x");
        assert_eq!(interpolate("Hello {{name}}", &params), "Hello {{name}}");
        assert_eq!(interpolate("Hello {{name", &params), "Hello {{name");
        assert_eq!(interpolate("{{}} and {{ other }}", &params), "{{}} and {{ other }}");
    }

    #[test]
    fn test_interpolate_finds_placeholders_after_stray_braces() {
        let params = Params::new().with("name", "Ada");
        assert_eq!(interpolate("{{{name}}}", &params), "{Ada}");
        assert_eq!(interpolate("{{ {{name}}", &params), "{{ Ada");
        assert_eq!(interpolate("Total: {{ x {{name}}!", &params), "Total: {{ x Ada!");
        assert_eq!(interpolate("{{}}{{name}}", &params), "{{}}Ada");
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let params = Params::new().with("a", "{{b}}").with("b", "nope");
        assert_eq!(interpolate("x{{a}}y", &params), "x{{b}}y");
    }

    #[test]
    fn test_resolve_without_params_leaves_placeholders() {
        let en = english();
        assert_eq!(resolve(&en, None, "common", "greeting", None), "Hello {{name}}");
    }

    #[test]
    fn test_namespace_lookup_returns_branch() {
        let en = english();
        let node = resolve_node(&en, None, "services", "web").unwrap();
        assert!(node.as_branch().is_some());
        assert_eq!(
            resolve(&en, None, "services", "web", Some(&Params::new().with("x", 1))),
            r#"{"body":"Fast sites","title":"Web"}"#
        );
    }

    #[test]
    fn test_has_key_ignores_fallback() {
        let fr = french();
        assert!(has_key(&fr, "common", "save"));
        assert!(!has_key(&fr, "services", "web.body"));
        assert!(!has_key(&fr, "pricing", "plan"));
    }

    #[test]
    fn test_params_from_iter() {
        let params: Params = [("name", "Ada")].into_iter().collect();
        assert_eq!(params.get("name"), Some("Ada"));
    }
}
