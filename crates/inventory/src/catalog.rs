//! Seed dataset used by the demo pipeline.

use rust_decimal::Decimal;

use crate::item::{Category, Item};
use crate::mixed::MixedValue;

/// The four reference items.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Pomme", Decimal::new(25, 1), 50, Category::Food),
        Item::new("Savon", Decimal::new(32, 1), 30, Category::Household),
        Item::new("T-shirt", Decimal::new(150, 1), 20, Category::Apparel),
        Item::new("Jeu vidéo", Decimal::new(600, 1), 10, Category::Leisure),
    ]
}

/// Two items mixed with a piece of text and a number.
pub fn sample_mixed() -> Vec<MixedValue> {
    vec![
        MixedValue::from(Item::new("Pomme", Decimal::new(25, 1), 50, Category::Food)),
        MixedValue::from(Item::new("Savon", Decimal::new(32, 1), 30, Category::Household)),
        MixedValue::from("Un objet quelconque"),
        MixedValue::from(12345i64),
    ]
}
