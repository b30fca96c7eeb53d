//! Validation of user-supplied language metadata.

use crate::error::LinguaError;
use crate::types::Language;

/// Minimum length of a language code.
pub const MIN_CODE_LEN: usize = 2;

/// Check `language`, collecting every violation into one error.
pub fn validate_language(language: &Language) -> Result<(), LinguaError> {
    let mut errors = Vec::new();
    if language.code.trim().chars().count() < MIN_CODE_LEN {
        errors.push(format!(
            "code must be at least {MIN_CODE_LEN} characters (got '{}')",
            language.code
        ));
    }
    if language.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if language.native_name.trim().is_empty() {
        errors.push("nativeName must not be empty".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(LinguaError::InvalidLanguage(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_language_passes() {
        let lang = Language::new("de", "German", "Deutsch", "🇩🇪");
        assert!(validate_language(&lang).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let lang = Language::new("xx", "", "Xx", "");
        match validate_language(&lang) {
            Err(LinguaError::InvalidLanguage(errors)) => {
                assert_eq!(errors, vec!["name must not be empty".to_string()]);
            }
            other => panic!("expected InvalidLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_all_violations_reported() {
        let lang = Language::new("x", " ", "", "");
        match validate_language(&lang) {
            Err(LinguaError::InvalidLanguage(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected InvalidLanguage, got {other:?}"),
        }
    }
}
