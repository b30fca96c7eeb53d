pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_language() -> String {
    "en".to_string()
}

pub(super) fn default_category() -> String {
    "common".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_db_path() -> String {
    "~/.lingua/data/locale.db".to_string()
}

pub(super) fn default_key_prefix() -> String {
    "lingua".to_string()
}
