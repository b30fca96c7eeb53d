//! Consumer facade — the `t(key)` call UI code makes.

use lingua_core::resolve::Params;
use lingua_core::types::Language;

use crate::manager::LocaleManager;

/// Borrowing view over a [`LocaleManager`] with a default category.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    manager: &'a LocaleManager,
    default_category: &'a str,
}

impl<'a> Translator<'a> {
    pub fn new(manager: &'a LocaleManager, default_category: &'a str) -> Self {
        Self {
            manager,
            default_category,
        }
    }

    /// Resolve `key` in `category` (or the default category).
    pub fn translate(&self, key: &str, category: Option<&str>, params: Option<&Params>) -> String {
        self.manager
            .t(key, category.unwrap_or(self.default_category), params)
    }

    /// Shorthand for [`translate`](Self::translate) in the default category.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None, None)
    }

    pub fn t_with(&self, key: &str, params: &Params) -> String {
        self.translate(key, None, Some(params))
    }

    /// A translator pinned to another default category.
    pub fn scoped(&self, category: &'a str) -> Translator<'a> {
        Translator::new(self.manager, category)
    }

    pub fn default_category(&self) -> &str {
        self.default_category
    }

    pub fn language(&self) -> Option<&'a Language> {
        self.manager.current_language_meta()
    }

    pub fn is_rtl(&self) -> bool {
        self.manager.is_rtl()
    }
}
