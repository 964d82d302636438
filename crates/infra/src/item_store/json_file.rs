use std::fs;
use std::path::{Path, PathBuf};

use stockroom_inventory::Item;

use super::r#trait::{ItemStore, StoreError};

/// Item store backed by a single indented JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for JsonFileStore {
    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        export(items, &self.path)
    }

    fn load(&self) -> Result<Vec<Item>, StoreError> {
        import(&self.path)
    }
}

/// Write `items` to `path` as an indented JSON array, replacing any existing file.
///
/// The document is fully encoded before the file is opened.
pub fn export(items: &[Item], path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();

    let json = serde_json::to_string_pretty(items).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "item export failed");
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(path = %path.display(), count = items.len(), "items exported");
    Ok(())
}

/// Read the item list stored at `path`.
pub fn import(path: impl AsRef<Path>) -> Result<Vec<Item>, StoreError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "item import failed");
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let items: Vec<Item> = serde_json::from_str(&json).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "item file is malformed");
        StoreError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(path = %path.display(), count = items.len(), "items imported");
    Ok(items)
}
