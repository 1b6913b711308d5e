//! Crate-level error

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::folder::FolderError;
use crate::input::translation::CodecError;
use crate::table::workbook::WorkbookError;

/// Any failure of a `t9n` command.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Folder(#[from] FolderError),

    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process JSON of '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wraps an I/O error with the path it concerns.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Wraps a JSON error with the path it concerns.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}
