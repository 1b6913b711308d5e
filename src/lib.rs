//! t9n
//!
//! Translation tooling around JSON locale dictionaries: a CLI that checks
//! coverage, converts locale folders to and from a spreadsheet and generates
//! TypeScript key declarations, plus a runtime [`translator::Translator`].

pub mod check;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod placeholder;
pub mod table;
pub mod translator;
pub mod types;

mod test_utils;

pub use error::Error;
