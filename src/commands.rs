//! CLI commands — lookups and authoring against the locale manager.


use clap::Subcommand;
use lingua_core::resolve::{resolve, Params};
use lingua_core::tree::leaf_paths;
use lingua_core::types::{Language, TranslationCategory, Translations};
use lingua_locale::{LocaleManager, Translator};
use std::path::{Path, PathBuf};

/// Known commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a translation key.
    T {
        /// Dot-path key, e.g. `fullStackDev.title`.
        key: String,
        #[arg(short, long)]
        category: Option<String>,
        /// Resolve in this language without switching to it.
        #[arg(short, long)]
        lang: Option<String>,
        /// Interpolation parameter, `name=value`. Repeatable.
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// List available languages.
    Languages,
    /// List translation categories.
    Categories,
    /// List leaf keys of the active language.
    Keys {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show manager state.
    Status,
    /// Switch the active language.
    Use { code: String },
    /// Register a custom language.
    AddLanguage {
        code: String,
        name: String,
        native_name: String,
        #[arg(long, default_value = "")]
        flag: String,
        #[arg(long)]
        rtl: bool,
        /// JSON file with `{ category: { key: value } }` translations.
        #[arg(long)]
        translations: Option<PathBuf>,
    },
    /// Add or override a translation.
    AddTranslation {
        category: String,
        key: String,
        value: String,
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Register a new category.
    AddCategory {
        id: String,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a custom language.
    RemoveLanguage { code: String },
    /// Remove a runtime-added category.
    RemoveCategory { id: String },
    /// Remove a translation override.
    RemoveTranslation {
        category: String,
        key: String,
        #[arg(short, long)]
        lang: Option<String>,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{s}'")),
    }
}

/// Run a command and return the text to print.
pub async fn handle(
    cmd: Command,
    manager: &mut LocaleManager,
    default_category: &str,
) -> anyhow::Result<String> {
    match cmd {
        Command::T {
            key,
            category,
            lang,
            params,
        } => {
            let params: Params = params.into_iter().collect();
            let category = category.as_deref().unwrap_or(default_category);
            match lang {
                None => Ok(Translator::new(manager, default_category).translate(
                    &key,
                    Some(category),
                    Some(&params),
                )),
                Some(code) => {
                    let translations = manager.translations_for(&code).await?;
                    Ok(resolve(
                        &translations,
                        manager.fallback_translations(),
                        category,
                        &key,
                        Some(&params),
                    ))
                }
            }
        }
        Command::Languages => Ok(handle_languages(manager)),
        Command::Categories => Ok(handle_categories(manager)),
        Command::Keys { category } => Ok(handle_keys(manager, category.as_deref())),
        Command::Status => Ok(handle_status(manager)),
        Command::Use { code } => {
            manager.set_language(&code).await?;
            Ok(format!("Language set to: {code}"))
        }
        Command::AddLanguage {
            code,
            name,
            native_name,
            flag,
            rtl,
            translations,
        } => {
            let translations = match translations {
                Some(path) => read_translations(&path)?,
                None => Translations::new(),
            };
            let language = Language::new(&code, &name, &native_name, &flag).with_rtl(rtl);
            manager.add_language(language, translations).await?;
            Ok(format!("Added language '{code}' ({name})."))
        }
        Command::AddTranslation {
            category,
            key,
            value,
            lang,
        } => {
            manager
                .add_translation(&category, &key, &value, lang.as_deref())
                .await?;
            let code = lang.as_deref().unwrap_or(manager.current_language());
            Ok(format!("Set {code}:{category}.{key}"))
        }
        Command::AddCategory {
            id,
            name,
            description,
        } => {
            let mut category = TranslationCategory::new(&id, &name);
            category.description = description;
            manager.add_category(category).await?;
            Ok(format!("Added category '{id}'."))
        }
        Command::RemoveLanguage { code } => {
            manager.remove_language(&code).await?;
            Ok(format!("Removed language '{code}'."))
        }
        Command::RemoveCategory { id } => {
            manager.remove_category(&id).await?;
            Ok(format!("Removed category '{id}'."))
        }
        Command::RemoveTranslation {
            category,
            key,
            lang,
        } => {
            let removed = manager
                .remove_translation(&category, &key, lang.as_deref())
                .await?;
            Ok(if removed {
                format!("Removed override {category}.{key}.")
            } else {
                format!("No override for {category}.{key}.")
            })
        }
    }
}

fn read_translations(path: &Path) -> anyhow::Result<Translations> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let translations: Translations = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid translations in {}: {e}", path.display()))?;
    Ok(translations)
}

fn handle_languages(manager: &LocaleManager) -> String {
    let mut out = String::from("Languages\n");
    for lang in manager.available_languages() {
        let marker = if lang.code == manager.current_language() {
            "*"
        } else {
            " "
        };
        let origin = if manager.catalog().contains(&lang.code) {
            "built-in"
        } else {
            "custom"
        };
        let rtl = if lang.rtl { ", rtl" } else { "" };
        out.push_str(&format!(
            "\n{marker} {} {} — {} / {} ({origin}{rtl})",
            lang.flag, lang.code, lang.name, lang.native_name
        ));
    }
    out
}

fn handle_categories(manager: &LocaleManager) -> String {
    let mut out = String::from("Categories\n");
    for category in manager.categories() {
        match &category.description {
            Some(d) => out.push_str(&format!("\n- {}: {} ({d})", category.id, category.name)),
            None => out.push_str(&format!("\n- {}: {}", category.id, category.name)),
        }
    }
    out
}

fn handle_keys(manager: &LocaleManager, category: Option<&str>) -> String {
    let mut lines = Vec::new();
    for (id, tree) in manager.translations() {
        if category.is_some_and(|c| c != id.as_str()) {
            continue;
        }
        for path in leaf_paths(tree) {
            lines.push(format!("{id}.{path}"));
        }
    }
    if lines.is_empty() {
        "No keys.".to_string()
    } else {
        lines.join("\n")
    }
}

fn handle_status(manager: &LocaleManager) -> String {
    let error = manager
        .error()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "Lingua Status\n\
         Language: {}\n\
         Phase: {:?}\n\
         Store: {}\n\
         Languages: {}\n\
         Categories: {}\n\
         Last error: {error}",
        manager.current_language(),
        manager.phase(),
        manager.store_name(),
        manager.available_languages().len(),
        manager.categories().len(),
    )
}
