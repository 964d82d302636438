//! Heterogeneous collections holding items alongside unrelated values.

use crate::item::Item;

/// One element of a mixed collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixedValue {
    Item(Item),
    Text(String),
    Number(i64),
}

impl MixedValue {
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            MixedValue::Item(item) => Some(item),
            MixedValue::Text(_) | MixedValue::Number(_) => None,
        }
    }
}

impl From<Item> for MixedValue {
    fn from(value: Item) -> Self {
        MixedValue::Item(value)
    }
}

impl From<String> for MixedValue {
    fn from(value: String) -> Self {
        MixedValue::Text(value)
    }
}

impl From<&str> for MixedValue {
    fn from(value: &str) -> Self {
        MixedValue::Text(value.to_string())
    }
}

impl From<i64> for MixedValue {
    fn from(value: i64) -> Self {
        MixedValue::Number(value)
    }
}

/// Only the item elements of `values`, in order.
pub fn filter_typed(values: &[MixedValue]) -> impl Iterator<Item = &Item> + Clone {
    values.iter().filter_map(MixedValue::as_item)
}
