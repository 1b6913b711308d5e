//! `translation.xlsx` reading and writing

use std::path::Path;

use calamine::{
    Data,
    Reader,
    open_workbook_auto,
};
use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_xlsxwriter::{
    Workbook,
    XlsxError,
};
use thiserror::Error;

use crate::table::rows::TranslationRow;
use crate::translator::format::LocaleFormat;

/// Name of the sheet holding version and export date.
pub const DESCRIPTION_SHEET: &str = "Description";

/// Header of the key column.
pub const KEY_HEADER: &str = "translationKey";

/// Header of the reference text column.
pub const META_HEADER: &str = "meta";

/// Locale whose date format is used for the `Created at` cell.
const DESCRIPTION_DATE_LOCALE: &str = "de";

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("Failed to read workbook: {0}")]
    Read(#[from] calamine::Error),

    #[error("Failed to write workbook: {0}")]
    Write(#[from] XlsxError),

    #[error("Worksheet '{0}' not found in workbook")]
    WorksheetMissing(String),

    #[error("Worksheet '{0}' has no header row")]
    EmptyWorksheet(String),

    #[error("Too many rows or columns for a worksheet: {0}")]
    OutOfRange(usize),

    #[error("Locale column '{0}' appears more than once")]
    DuplicateLocale(String),

    #[error("Locale column '{0}' is not a plain file name")]
    InvalidLocale(String),
}

/// Values of the description sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookInfo {
    pub version: String,
    pub created_at: NaiveDate,
    pub worksheet_name: String,
}

/// Contents of the translation sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSheet {
    /// Locale columns, every header after `translationKey` and `meta`.
    pub locales: Vec<String>,
    pub rows: Vec<TranslationRow>,
}

/// Writes the description sheet and the translation sheet to `path`.
///
/// Empty cells are left blank.
///
/// # Errors
/// [`WorkbookError::Write`] when the file cannot be written.
pub fn write_workbook(
    path: &Path,
    info: &WorkbookInfo,
    rows: &[TranslationRow],
    locales: &[String],
) -> Result<(), WorkbookError> {
    let mut workbook = Workbook::new();

    let description = workbook.add_worksheet();
    description.set_name(DESCRIPTION_SHEET)?;
    description.write_string(0, 0, "Version")?;
    description.write_string(0, 1, info.version.as_str())?;
    description.write_string(1, 0, "Created at")?;
    description.write_string(
        1,
        1,
        LocaleFormat::for_locale(DESCRIPTION_DATE_LOCALE).format_date(&info.created_at),
    )?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(info.worksheet_name.as_str())?;

    let headers = [KEY_HEADER, META_HEADER].into_iter().chain(locales.iter().map(String::as_str));
    for (col, header) in headers.enumerate() {
        sheet.write_string(0, column_index(col)?, header)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_index = row_index(index + 1)?;
        let cells = [row.translation_key.as_str(), row.meta.as_str()]
            .into_iter()
            .chain(locales.iter().map(|locale| row.value(locale)));
        for (col, text) in cells.enumerate() {
            if !text.is_empty() {
                sheet.write_string(row_index, column_index(col)?, text)?;
            }
        }
    }

    workbook.save(path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Workbook written");
    Ok(())
}

/// Reads the translation sheet `worksheet_name` from `path`.
///
/// The header row defines the locale columns. Cells are read as text and
/// blank cells become empty strings.
///
/// # Errors
/// - [`WorkbookError::Read`] for unreadable files
/// - [`WorkbookError::WorksheetMissing`] when the sheet does not exist
/// - [`WorkbookError::EmptyWorksheet`] when the sheet has no header row
/// - [`WorkbookError::DuplicateLocale`] when two locale columns share a header
pub fn read_workbook(path: &Path, worksheet_name: &str) -> Result<TranslationSheet, WorkbookError> {
    let mut workbook = open_workbook_auto(path)?;

    if !workbook.sheet_names().iter().any(|name| name == worksheet_name) {
        return Err(WorkbookError::WorksheetMissing(worksheet_name.to_string()));
    }

    let range = workbook.worksheet_range(worksheet_name)?;
    let mut lines = range.rows();

    let header = lines.next().ok_or_else(|| WorkbookError::EmptyWorksheet(worksheet_name.to_string()))?;
    let locales: Vec<String> = header.iter().skip(2).map(cell_text).collect();
    for (index, locale) in locales.iter().enumerate() {
        if !locale.trim().is_empty() && locales.iter().take(index).any(|seen| seen == locale) {
            return Err(WorkbookError::DuplicateLocale(locale.clone()));
        }
    }

    let rows = lines
        .filter_map(|cells| {
            let translation_key = cells.first().map(cell_text).unwrap_or_default();
            if translation_key.is_empty() {
                return None;
            }
            let meta = cells.get(1).map(cell_text).unwrap_or_default();
            let values: IndexMap<String, String> = locales
                .iter()
                .enumerate()
                .map(|(offset, locale)| {
                    (locale.clone(), cells.get(offset + 2).map(cell_text).unwrap_or_default())
                })
                .collect();
            Some(TranslationRow { translation_key, meta, values })
        })
        .collect();

    Ok(TranslationSheet { locales, rows })
}

/// Cell content as text.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => {
            tracing::debug!(?other, "Ignoring unsupported cell");
            String::new()
        }
    }
}

/// Worksheet column number.
fn column_index(col: usize) -> Result<u16, WorkbookError> {
    u16::try_from(col).map_err(|_| WorkbookError::OutOfRange(col))
}

/// Worksheet row number.
fn row_index(row: usize) -> Result<u32, WorkbookError> {
    u32::try_from(row).map_err(|_| WorkbookError::OutOfRange(row))
}
