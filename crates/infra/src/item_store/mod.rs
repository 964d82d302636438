//! Flat-file item storage boundary.
//!
//! The whole item list is written and read back in one piece; there is no
//! incremental update and no partial read.

pub mod json_file;
pub mod r#trait;

pub use json_file::{JsonFileStore, export, import};
pub use r#trait::{ItemStore, StoreError};
