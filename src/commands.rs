//! Implementations of the `t9n` subcommands
pub mod export;
pub mod import;
pub mod typedefs;

pub use export::{
    WORKBOOK_FILE_NAME,
    export_workbook,
};
pub use import::import_workbook;
pub use typedefs::{
    generate_types,
    typedefs_from_file,
};
