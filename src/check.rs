//! Translation coverage checks against the `meta` reference.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::config::T9nSettings;
use crate::input::folder::{
    FolderError,
    load_locale_folder,
};
use crate::placeholder::{
    count_params,
    extract_params,
};
use crate::types::{
    FlatMap,
    LocaleKeys,
};

/// Coverage statistics of one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    pub locale: String,
    pub translation_keys: usize,
    pub missing_translation_keys: usize,
    /// Share of translated reference keys, rounded to two decimals.
    pub coverage: f64,
    /// Keys whose placeholder count differs from the reference, in reference order.
    pub missing_params: Vec<String>,
}

/// Compares one locale against the reference keys.
///
/// A key counts as missing when it is absent or empty. Placeholders are only
/// compared when the reference text has some; a differing count records the
/// key in `missing_params`.
#[must_use]
pub fn validate_language(reference: &FlatMap, language: &LocaleKeys) -> CoverageResult {
    let mut translation_keys = 0;
    let mut missing_translation_keys = 0;
    let mut missing_params = Vec::new();

    for (key, reference_text) in reference {
        translation_keys += 1;

        match language.keys.get(key).filter(|text| !text.is_empty()) {
            None => missing_translation_keys += 1,
            Some(text) => {
                if let Some(expected) = extract_params(reference_text)
                    && expected.len() != count_params(text)
                {
                    tracing::debug!(locale = %language.locale, key = %key, "Placeholder mismatch");
                    missing_params.push(key.clone());
                }
            }
        }
    }

    CoverageResult {
        locale: language.locale.clone(),
        translation_keys,
        missing_translation_keys,
        coverage: coverage_ratio(translation_keys, missing_translation_keys),
        missing_params,
    }
}

/// `(total - missing) / total` rounded to two decimals, `0` without keys.
#[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
fn coverage_ratio(total: usize, missing: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = total.saturating_sub(missing) as f64 / total as f64;
    (ratio * 100.0).round() / 100.0
}

/// Checks every locale against the reference, in the given order.
#[must_use]
pub fn check(reference: &FlatMap, languages: &[LocaleKeys]) -> Vec<CoverageResult> {
    languages.iter().map(|language| validate_language(reference, language)).collect()
}

/// Loads a locale folder and checks all its locales.
///
/// # Errors
/// Propagates [`FolderError`] from loading the folder.
pub fn check_folder(folder: &Path, settings: &T9nSettings) -> Result<Vec<CoverageResult>, FolderError> {
    let locale_folder = load_locale_folder(folder, settings)?;
    Ok(check(&locale_folder.reference, &locale_folder.languages))
}

/// Renders the results as an aligned text table.
#[must_use]
pub fn format_report(results: &[CoverageResult]) -> String {
    const HEADERS: [&str; 5] =
        ["locale", "translationKeys", "missingTranslationKeys", "coverage", "missingParams"];

    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|result| {
            [
                result.locale.clone(),
                result.translation_keys.to_string(),
                result.missing_translation_keys.to_string(),
                format!("{:.2}", result.coverage),
                result.missing_params.join(", "),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut report = String::new();
    write_row(&mut report, &HEADERS.map(String::from), &widths);
    let separator = widths.map(|width| "-".repeat(width));
    write_row(&mut report, &separator, &widths);
    for row in &rows {
        write_row(&mut report, row, &widths);
    }
    report
}

/// Appends one padded table line.
fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}
