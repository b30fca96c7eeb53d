//! Host environment language preference.

/// Reduce a locale tag to its primary language subtag.
///
/// `"en-US"` → `"en"`, `"pt_BR.UTF-8"` → `"pt"`.
pub fn normalize_language_code(tag: &str) -> String {
    tag.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Preferred language from `LC_ALL`, `LC_MESSAGES`, or `LANG`, normalized.
///
/// The `C` and `POSIX` locales carry no language preference.
pub fn preferred_language_from_env() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty())
        .and_then(|v| preferred_language_from_tag(&v))
}

fn preferred_language_from_tag(tag: &str) -> Option<String> {
    let code = normalize_language_code(tag);
    if code.is_empty() || code == "c" || code == "posix" {
        None
    } else {
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_language_code() {
        assert_eq!(normalize_language_code("en-US"), "en");
        assert_eq!(normalize_language_code("pt_BR.UTF-8"), "pt");
        assert_eq!(normalize_language_code("FR"), "fr");
        assert_eq!(normalize_language_code("zh"), "zh");
        assert_eq!(normalize_language_code(""), "");
    }

    #[test]
    fn test_posix_locale_has_no_preference() {
        assert_eq!(preferred_language_from_tag("C"), None);
        assert_eq!(preferred_language_from_tag("POSIX"), None);
        assert_eq!(preferred_language_from_tag("C.UTF-8"), None);
        assert_eq!(
            preferred_language_from_tag("es_ES.UTF-8"),
            Some("es".to_string())
        );
    }
}
