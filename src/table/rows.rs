//! Row-oriented interchange shape between locale files and the spreadsheet

use indexmap::IndexMap;

use crate::input::translation::{
    CodecError,
    deflatten_json,
};
use crate::types::{
    Dictionary,
    FlatMap,
    LocaleKeys,
    REFERENCE_LOCALE,
};

/// One spreadsheet line: a reference key, its `meta` text and one cell per locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    pub translation_key: String,
    pub meta: String,
    /// Locale → cell text, in column order.
    pub values: IndexMap<String, String>,
}

impl TranslationRow {
    /// Cell text of `locale`, empty when the column is absent.
    #[must_use]
    pub fn value(&self, locale: &str) -> &str {
        self.values.get(locale).map_or("", String::as_str)
    }
}

/// Locale columns for the configured languages, without the reference.
#[must_use]
pub fn locale_columns(configured: &[String]) -> Vec<String> {
    configured.iter().filter(|locale| *locale != REFERENCE_LOCALE).cloned().collect()
}

/// Builds one row per reference key, in reference order.
///
/// Each row has a cell for every locale in `locales`; locales without a
/// translation (or without a file at all) get an empty cell.
#[must_use]
pub fn to_rows(reference: &FlatMap, languages: &[LocaleKeys], locales: &[String]) -> Vec<TranslationRow> {
    let columns: Vec<(&str, Option<&FlatMap>)> = locales
        .iter()
        .map(|locale| {
            let keys = languages.iter().find(|l| &l.locale == locale).map(|l| &l.keys);
            if keys.is_none() {
                tracing::debug!(locale = %locale, "No locale file for configured language");
            }
            (locale.as_str(), keys)
        })
        .collect();

    reference
        .iter()
        .map(|(translation_key, meta)| {
            let values = columns
                .iter()
                .map(|(locale, keys)| {
                    let text = keys.and_then(|keys| keys.get(translation_key)).cloned();
                    ((*locale).to_string(), text.unwrap_or_default())
                })
                .collect();

            TranslationRow { translation_key: translation_key.clone(), meta: meta.clone(), values }
        })
        .collect()
}

/// Collects the non-empty cells of each locale column into a flat key map.
#[must_use]
pub fn rows_to_flat(rows: &[TranslationRow], locales: &[String]) -> Vec<LocaleKeys> {
    locales
        .iter()
        .map(|locale| {
            let keys: FlatMap = rows
                .iter()
                .filter(|row| !row.value(locale).is_empty())
                .map(|row| (row.translation_key.clone(), row.value(locale).to_string()))
                .collect();
            LocaleKeys::new(locale.clone(), keys)
        })
        .collect()
}

/// Rebuilds the nested dictionary of every locale column.
///
/// # Errors
/// [`CodecError::PathConflict`] when the keys of a column are ambiguous.
pub fn from_rows(
    rows: &[TranslationRow],
    locales: &[String],
    separator: &str,
) -> Result<IndexMap<String, Dictionary>, CodecError> {
    rows_to_flat(rows, locales)
        .into_iter()
        .map(|language| {
            let dictionary = deflatten_json(&language.keys, separator)?;
            Ok((language.locale, dictionary))
        })
        .collect()
}
