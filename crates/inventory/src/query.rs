//! Read-only queries over a list of items.
//!
//! Every query borrows the list and never reorders or mutates it.

use rust_decimal::Decimal;

use crate::item::{Category, Item, PriceView};

/// Items of the given category, in their original relative order.
///
/// The iterator is lazy. Cloning it yields an independent pass over the same
/// list, so the result can be walked more than once.
pub fn filter_by_category(
    items: &[Item],
    category: Category,
) -> impl Iterator<Item = &Item> + Clone {
    items.iter().filter(move |item| item.category() == category)
}

/// Items ordered by price, highest first.
///
/// The sort is stable: items with equal prices keep their original order.
pub fn sort_by_price_desc(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| b.price().cmp(&a.price()));
    sorted
}

/// Sum of all quantities (0 for an empty list).
pub fn total_quantity(items: &[Item]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Exact sum of `price × quantity` over all items (0 for an empty list).
pub fn total_stock_value(items: &[Item]) -> Decimal {
    items.iter().map(Item::stock_value).sum()
}

/// Name/price view of each item, in order.
pub fn project(items: &[Item]) -> impl Iterator<Item = PriceView<'_>> + Clone {
    items.iter().map(Item::price_view)
}
