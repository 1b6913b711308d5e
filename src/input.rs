//! Translation file input: key-path codec and locale folder loading
pub mod folder;
pub mod translation;
