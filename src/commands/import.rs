//! `t9n import`: `translation.xlsx` to one JSON file per locale

use std::path::{
    Component,
    Path,
    PathBuf,
};

use serde_json::Value;

use crate::config::T9nSettings;
use crate::error::Error;
use crate::table::rows::from_rows;
use crate::table::workbook::{
    WorkbookError,
    read_workbook,
};

/// Imports the translation sheet of `workbook` into `<output_dir>/<locale>.json`.
///
/// Every locale column of the sheet produces one file holding the nested
/// dictionary of its non-empty cells. Returns the written paths in column
/// order.
///
/// # Errors
/// - [`Error::Workbook`] when the workbook or sheet cannot be read, or a
///   locale header is not a plain file name
/// - [`Error::Codec`] when the keys of a column conflict
/// - [`Error::Io`] / [`Error::Json`] when a file cannot be written
pub fn import_workbook(
    workbook: &Path,
    output_dir: &Path,
    settings: &T9nSettings,
) -> Result<Vec<PathBuf>, Error> {
    let sheet = read_workbook(workbook, &settings.worksheet_name)?;

    let locales: Vec<String> = sheet
        .locales
        .iter()
        .filter(|locale| {
            let blank = locale.trim().is_empty();
            if blank {
                tracing::warn!("Skipping locale column without header");
            }
            !blank
        })
        .cloned()
        .collect();

    if let Some(locale) = locales.iter().find(|locale| !is_file_stem(locale)) {
        return Err(WorkbookError::InvalidLocale(locale.clone()).into());
    }

    let dictionaries = from_rows(&sheet.rows, &locales, &settings.key_separator)?;

    std::fs::create_dir_all(output_dir).map_err(|source| Error::io(output_dir, source))?;

    let mut written = Vec::with_capacity(dictionaries.len());
    for (locale, dictionary) in &dictionaries {
        let path = output_dir.join(format!("{locale}.json"));
        write_dictionary(&path, dictionary)?;
        tracing::debug!(path = %path.display(), "Wrote locale file");
        written.push(path);
    }

    tracing::info!(output = %output_dir.display(), files = written.len(), "Imported workbook");
    Ok(written)
}

/// `locale` names a single entry inside the output directory.
fn is_file_stem(locale: &str) -> bool {
    let mut components = Path::new(locale).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == locale
    )
}

/// Pretty JSON with a two-space indent and a trailing newline.
fn write_dictionary(path: &Path, dictionary: &Value) -> Result<(), Error> {
    let mut content = serde_json::to_string_pretty(dictionary).map_err(|source| Error::json(path, source))?;
    content.push('\n');
    std::fs::write(path, content).map_err(|source| Error::io(path, source))
}
