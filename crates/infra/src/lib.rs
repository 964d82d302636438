//! Infrastructure layer: file storage for inventory items.

pub mod item_store;

pub use item_store::{ItemStore, JsonFileStore, StoreError, export, import};
