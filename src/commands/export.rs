//! `t9n export`: locale folder to `translation.xlsx`

use std::path::{
    Path,
    PathBuf,
};

use chrono::NaiveDate;

use crate::config::T9nSettings;
use crate::error::Error;
use crate::input::folder::load_locale_folder;
use crate::table::rows::{
    locale_columns,
    to_rows,
};
use crate::table::workbook::{
    WorkbookInfo,
    write_workbook,
};

/// File name of exported workbooks.
pub const WORKBOOK_FILE_NAME: &str = "translation.xlsx";

/// Exports the locale folder `folder` to `<output_dir>/translation.xlsx`.
///
/// One row per reference key and one column per configured language.
/// Returns the path of the written workbook.
///
/// # Errors
/// - [`Error::Folder`] when the folder cannot be loaded
/// - [`Error::Io`] when `output_dir` cannot be created
/// - [`Error::Workbook`] when the workbook cannot be written
pub fn export_workbook(
    folder: &Path,
    output_dir: &Path,
    settings: &T9nSettings,
    created_at: NaiveDate,
) -> Result<PathBuf, Error> {
    let locale_folder = load_locale_folder(folder, settings)?;
    let locales = locale_columns(&settings.languages);
    let rows = to_rows(&locale_folder.reference, &locale_folder.languages, &locales);

    for language in &locale_folder.languages {
        if !locales.contains(&language.locale) {
            tracing::warn!(
                locale = %language.locale,
                "Locale file is not listed in the configured languages and is not exported"
            );
        }
    }

    std::fs::create_dir_all(output_dir).map_err(|source| Error::io(output_dir, source))?;
    let path = output_dir.join(WORKBOOK_FILE_NAME);

    let info = WorkbookInfo {
        version: settings.version.clone(),
        created_at,
        worksheet_name: settings.worksheet_name.clone(),
    };
    write_workbook(&path, &info, &rows, &locales)?;

    tracing::info!(path = %path.display(), keys = rows.len(), locales = ?locales, "Exported workbook");
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::table::workbook::read_workbook;

    fn write_folder(dir: &Path) {
        fs::write(dir.join("meta.json"), r#"{"page": {"title": "Title", "text": "Hi {{ name }}"}}"#).unwrap();
        fs::write(dir.join("de.json"), r#"{"page": {"title": "Titel"}}"#).unwrap();
        fs::write(dir.join("fr.json"), r#"{"page": {"title": "Titre"}}"#).unwrap();
    }

    #[rstest]
    fn test_export_workbook_configured_columns() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_folder(input.path());
        let out_dir = output.path().join("nested");

        let path = export_workbook(
            input.path(),
            &out_dir,
            &T9nSettings::default(),
            NaiveDate::from_ymd_opt(2022, 12, 20).unwrap(),
        )
        .unwrap();

        assert_eq!(path, out_dir.join(WORKBOOK_FILE_NAME));
        let sheet = read_workbook(&path, "Translation").unwrap();
        assert_eq!(sheet.locales, vec!["de", "en"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].translation_key, "page.title");
        assert_eq!(sheet.rows[0].value("de"), "Titel");
        assert_eq!(sheet.rows[0].value("en"), "");
        assert_eq!(sheet.rows[1].meta, "Hi {{ name }}");
    }

    #[rstest]
    fn test_export_workbook_without_reference() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("de.json"), "{}").unwrap();

        let result = export_workbook(
            input.path(),
            output.path(),
            &T9nSettings::default(),
            NaiveDate::from_ymd_opt(2022, 12, 20).unwrap(),
        );

        assert!(matches!(result, Err(Error::Folder(_))));
        assert!(!output.path().join(WORKBOOK_FILE_NAME).exists());
    }
}
