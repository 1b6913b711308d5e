//! Shared helpers for unit tests
#![cfg(test)]

use serde_json::Value;

use crate::translator::Language;
use crate::types::FlatMap;

/// Builds a `FlatMap` keeping the entry order.
pub(crate) fn flat_map(entries: &[(&str, &str)]) -> FlatMap {
    entries.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

/// Builds a `Language` named `"<locale> (test)"`.
pub(crate) fn language(locale: &str, dictionary: Value) -> Language {
    Language::new(locale, format!("{locale} (test)"), dictionary)
}
