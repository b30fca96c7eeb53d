use thiserror::Error;

/// Top-level error type for Lingua.
#[derive(Debug, Error)]
pub enum LinguaError {
    /// The language code is not among the available languages.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// No translations could be loaded for the language.
    #[error("translations not found for language: {0}")]
    TranslationsNotFound(String),

    /// Language metadata failed validation. Carries every violation.
    #[error("invalid language: {}", .0.join("; "))]
    InvalidLanguage(Vec<String>),

    /// A language with this code already exists.
    #[error("language already exists: {0}")]
    DuplicateLanguage(String),

    /// A category with this id already exists.
    #[error("category already exists: {0}")]
    DuplicateCategory(String),

    /// The category id is not registered.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Built-in catalog languages cannot be removed.
    #[error("built-in language cannot be removed: {0}")]
    BuiltinLanguage(String),

    /// Built-in catalog categories cannot be removed.
    #[error("built-in category cannot be removed: {0}")]
    BuiltinCategory(String),

    /// Initialization could not load the requested language.
    #[error("initialization failed: {0}")]
    InitializationFailure(String),

    /// Persistent store error.
    #[error("store error: {0}")]
    Store(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Copyable discriminant of [`LinguaError`], for state that outlives the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedLanguage,
    TranslationsNotFound,
    InvalidLanguage,
    DuplicateLanguage,
    DuplicateCategory,
    UnknownCategory,
    BuiltinLanguage,
    BuiltinCategory,
    InitializationFailure,
    Store,
    Config,
    Io,
    Serialization,
}

impl LinguaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedLanguage(_) => ErrorKind::UnsupportedLanguage,
            Self::TranslationsNotFound(_) => ErrorKind::TranslationsNotFound,
            Self::InvalidLanguage(_) => ErrorKind::InvalidLanguage,
            Self::DuplicateLanguage(_) => ErrorKind::DuplicateLanguage,
            Self::DuplicateCategory(_) => ErrorKind::DuplicateCategory,
            Self::UnknownCategory(_) => ErrorKind::UnknownCategory,
            Self::BuiltinLanguage(_) => ErrorKind::BuiltinLanguage,
            Self::BuiltinCategory(_) => ErrorKind::BuiltinCategory,
            Self::InitializationFailure(_) => ErrorKind::InitializationFailure,
            Self::Store(_) => ErrorKind::Store,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

/// Last recorded failure, as exposed to UI code that polls state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&LinguaError> for ErrorState {
    fn from(err: &LinguaError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_language_lists_every_violation() {
        let err = LinguaError::InvalidLanguage(vec![
            "name must not be empty".to_string(),
            "nativeName must not be empty".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid language: name must not be empty; nativeName must not be empty"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidLanguage);
    }

    #[test]
    fn test_error_state_from_error() {
        let err = LinguaError::UnsupportedLanguage("zz".to_string());
        let state = ErrorState::from(&err);
        assert_eq!(state.kind, ErrorKind::UnsupportedLanguage);
        assert_eq!(state.message, "unsupported language: zz");
    }
}
