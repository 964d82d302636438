//! Inventory domain module.
//!
//! This crate contains the inventory records and the read-only queries over
//! them, implemented purely as deterministic domain logic (no file IO, no
//! storage). Printing goes through a caller-supplied writer.

pub mod catalog;
pub mod display;
pub mod item;
pub mod mixed;
pub mod query;

pub use catalog::{sample_items, sample_mixed};
pub use display::{display, format_item, write_items};
pub use item::{Category, Item, PriceView};
pub use mixed::{MixedValue, filter_typed};
pub use query::{
    filter_by_category, project, sort_by_price_desc, total_quantity, total_stock_value,
};
