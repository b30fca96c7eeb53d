mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LinguaError;
use defaults::*;

/// Top-level Lingua configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lingua: LinguaConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Locale behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinguaConfig {
    /// Language used when nothing is persisted and the environment has no
    /// supported preference.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Language whose built-in catalog entry backs missing keys.
    #[serde(default = "default_language")]
    pub fallback_language: String,
    /// Category used by the translator when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Persist the current-language choice.
    #[serde(default = "default_true")]
    pub persist: bool,
    /// Consult `LC_ALL`/`LANG` during initialization.
    #[serde(default = "default_true")]
    pub detect_environment: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LinguaConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            fallback_language: default_language(),
            default_category: default_category(),
            persist: true,
            detect_environment: true,
            log_level: default_log_level(),
        }
    }
}

/// Store backend selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite file on disk (default).
    #[default]
    Sqlite,
    /// Process-local map, lost on exit.
    Memory,
}

impl StoreBackend {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

/// Store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_db_path")]
    pub db_path: String,
    /// Prefix for the keys the manager writes.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            db_path: default_db_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, LinguaError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LinguaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| LinguaError::Config(format!("failed to parse config: {}", e)))?;

    if config.lingua.default_language.trim().is_empty() {
        return Err(LinguaError::Config(
            "lingua.default_language must not be empty".to_string(),
        ));
    }

    Ok(config)
}
