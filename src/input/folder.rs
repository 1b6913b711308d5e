//! Locale folder loading
//!
//! A locale folder holds one JSON dictionary per locale (`de.json`,
//! `en.json`, ...) and exactly one reference dictionary named `meta.json`.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobMatcher,
};
use ignore::WalkBuilder;
use serde_json::Value;
use thiserror::Error;

use crate::config::T9nSettings;
use crate::input::translation::flatten_json;
use crate::types::{
    FlatMap,
    LocaleKeys,
    REFERENCE_LOCALE,
};

/// Errors raised while loading a locale folder.
#[derive(Error, Debug)]
pub enum FolderError {
    /// No `meta` dictionary in the folder.
    #[error("Could not find a meta.json file in the provided folder: {}", .0.display())]
    FolderMissingReference(PathBuf),

    /// Reading the folder or a file failed.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// File or folder being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A locale file is not valid JSON.
    #[error("Failed to parse JSON in '{}': {source}", path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured file pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        /// Configured pattern.
        pattern: String,
        /// Underlying error.
        #[source]
        source: globset::Error,
    },
}

/// All dictionaries of a locale folder, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFolder {
    /// Flattened `meta` dictionary.
    pub reference: FlatMap,

    /// Every other locale, sorted by file name.
    pub languages: Vec<LocaleKeys>,
}

impl LocaleFolder {
    /// Looks up a locale by identifier.
    #[must_use]
    pub fn language(&self, locale: &str) -> Option<&LocaleKeys> {
        self.languages.iter().find(|language| language.locale == locale)
    }
}

/// Load every locale file directly inside `folder`.
///
/// Files are matched against `settings.file_pattern` by file name and the
/// locale identifier is the file stem.
///
/// # Errors
/// - [`FolderError::FolderMissingReference`] when no `meta` file exists
/// - [`FolderError::Io`] / [`FolderError::Json`] for unreadable files
pub fn load_locale_folder(folder: &Path, settings: &T9nSettings) -> Result<LocaleFolder, FolderError> {
    tracing::debug!(folder = %folder.display(), "Loading locale folder");

    let matcher = Glob::new(&settings.file_pattern)
        .map_err(|source| FolderError::Pattern { pattern: settings.file_pattern.clone(), source })?
        .compile_matcher();

    let mut reference = None;
    let mut languages = Vec::new();

    for path in find_locale_files(folder, &matcher)? {
        let Some(locale) = path.file_stem().map(|stem| stem.to_string_lossy().to_string()) else {
            continue;
        };
        let keys = load_flat_file(&path, &settings.key_separator)?;
        tracing::debug!(locale = %locale, keys = keys.len(), "Loaded locale file");

        if locale == REFERENCE_LOCALE {
            reference = Some(keys);
        } else {
            languages.push(LocaleKeys::new(locale, keys));
        }
    }

    let reference =
        reference.ok_or_else(|| FolderError::FolderMissingReference(folder.to_path_buf()))?;

    Ok(LocaleFolder { reference, languages })
}

/// Read one JSON dictionary and flatten it.
///
/// # Errors
/// [`FolderError::Io`] or [`FolderError::Json`] naming the file.
pub fn load_flat_file(path: &Path, separator: &str) -> Result<FlatMap, FolderError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| FolderError::Io { path: path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| FolderError::Json { path: path.to_path_buf(), source })?;

    Ok(flatten_json(&json, separator, None))
}

/// List matching files in `folder` (not recursive), sorted by file name.
fn find_locale_files(folder: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>, FolderError> {
    if !folder.is_dir() {
        return Err(FolderError::Io {
            path: folder.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(folder)
        .standard_filters(false)
        .max_depth(Some(1))
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let Some(file_name) = entry.path().file_name() else {
            continue;
        };
        if matcher.is_match(file_name) {
            found_files.push(entry.path().to_path_buf());
        }
    }

    Ok(found_files)
}
