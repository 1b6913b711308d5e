use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::{
    DEFAULT_KEY_SEPARATOR,
    REFERENCE_LOCALE,
};

/// Characters Excel rejects in worksheet names.
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Longest worksheet name Excel accepts.
const MAX_SHEET_NAME_LEN: usize = 31;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[2]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list of validation errors, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `t9n.config.json`.
///
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct T9nSettings {
    /// Written to the description sheet of exported workbooks.
    pub version: String,

    /// Name of the sheet holding the translation table.
    pub worksheet_name: String,

    /// Locale columns of exported workbooks, in column order.
    ///
    /// `meta` is accepted here and skipped, as it always has its own column.
    pub languages: Vec<String>,

    pub key_separator: String,

    /// Glob selecting locale files inside a folder.
    pub file_pattern: String,
}

impl Default for T9nSettings {
    fn default() -> Self {
        Self {
            version: "0.0.1".to_string(),
            worksheet_name: "Translation".to_string(),
            languages: vec![REFERENCE_LOCALE.to_string(), "de".to_string(), "en".to_string()],
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            file_pattern: "*.json".to_string(),
        }
    }
}

impl T9nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Worksheet name Excel would reject
    /// - Duplicate language
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        if self.worksheet_name.trim().is_empty() {
            errors.push(ValidationError::new(
                "worksheetName",
                "The worksheet name cannot be empty. Example: \"Translation\"",
            ));
        } else if self.worksheet_name.chars().count() > MAX_SHEET_NAME_LEN
            || self.worksheet_name.contains(INVALID_SHEET_CHARS)
        {
            errors.push(ValidationError::new(
                "worksheetName",
                format!(
                    "Invalid worksheet name '{}': at most {MAX_SHEET_NAME_LEN} characters, none of []:*?/\\",
                    self.worksheet_name
                ),
            ));
        }

        if self.languages.is_empty() {
            errors.push(ValidationError::new(
                "languages",
                "At least one language is required. Example: [\"meta\", \"de\", \"en\"]",
            ));
        }

        for (index, language) in self.languages.iter().enumerate() {
            if language.is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    "The language cannot be empty",
                ));
            } else if self.languages.iter().take(index).any(|seen| seen == language) {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    format!("Duplicate language '{language}'"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
