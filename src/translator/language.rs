//! Language descriptors and translation results

use serde::Serialize;

use crate::types::Dictionary;

/// A registered language: locale identifier, display name and dictionary.
///
/// The dictionary may be partial; missing keys resolve through the fallback
/// language.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub locale: String,
    pub name: String,
    pub dictionary: Dictionary,
}

impl Language {
    #[must_use]
    pub fn new(locale: impl Into<String>, name: impl Into<String>, dictionary: Dictionary) -> Self {
        Self { locale: locale.into(), name: name.into(), dictionary }
    }
}

/// Identifier before the first `-`; the whole identifier when there is none.
#[must_use]
pub fn base_locale(locale: &str) -> &str {
    locale.split_once('-').map_or(locale, |(base, _)| base)
}

/// Where a translation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationHit {
    /// Not found anywhere; the key itself is returned.
    None,
    FallbackDictionary,
    CurrentDictionary,
}

/// Translated text together with its [`TranslationHit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationInfo {
    pub text: String,
    pub hit: TranslationHit,
}
