//! Core types used throughout the project.

use indexmap::IndexMap;
use serde_json::Value;

/// Base name of the reference dictionary (`meta.json`, `meta` column).
pub const REFERENCE_LOCALE: &str = "meta";

/// Default key separator for dotted translation keys.
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Flattened translation key map (e.g., "common.hello" -> "Hello").
///
/// Insertion order is kept so that reports, rows and generated files follow
/// the order of the source dictionary.
pub type FlatMap = IndexMap<String, String>;

/// A nested translation dictionary as parsed from a locale file.
pub type Dictionary = Value;

/// A flat key map tagged with the locale it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKeys {
    /// Locale identifier (file stem or column header).
    pub locale: String,

    /// Flattened translations of this locale.
    pub keys: FlatMap,
}

impl LocaleKeys {
    #[must_use]
    pub fn new(locale: impl Into<String>, keys: FlatMap) -> Self {
        Self { locale: locale.into(), keys }
    }
}
