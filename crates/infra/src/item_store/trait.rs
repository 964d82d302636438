use std::path::PathBuf;

use thiserror::Error;

use stockroom_inventory::Item;

/// Item store errors.
///
/// A store operation either fully succeeds or fails with one of these; there
/// is no partial result.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be written or read.
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a well-formed item list (or the list could not
    /// be encoded).
    #[error("malformed item data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}

/// Whole-list persistence for items.
///
/// `save` replaces whatever was stored before; `load` returns a fresh list
/// that shares nothing with the values that were saved.
pub trait ItemStore {
    fn save(&self, items: &[Item]) -> Result<(), StoreError>;

    fn load(&self) -> Result<Vec<Item>, StoreError>;
}
