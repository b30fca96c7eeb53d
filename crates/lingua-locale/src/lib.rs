//! # lingua-locale
//!
//! Built-in translation catalog, the runtime-extensible `LocaleManager`, and
//! the `Translator` facade UI code calls into.

pub mod catalog;
pub mod manager;
pub mod translator;

pub use catalog::Catalog;
pub use manager::{LocaleManager, ManagerOptions, Phase};
pub use translator::Translator;
