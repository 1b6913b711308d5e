//! Spreadsheet interchange: translation rows and the `translation.xlsx` workbook
pub mod rows;
pub mod workbook;
