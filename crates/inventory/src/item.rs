use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ValueObject};

/// Fixed classification of an inventory item.
///
/// Serialized by symbolic name. The French labels used by older exports are
/// accepted on input and never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "Alimentaire")]
    Food,
    #[serde(alias = "Droguerie")]
    Household,
    #[serde(alias = "Habillement")]
    Apparel,
    #[serde(alias = "Loisir")]
    Leisure,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Household,
        Category::Apparel,
        Category::Leisure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Household => "Household",
            Category::Apparel => "Apparel",
            Category::Leisure => "Leisure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" | "alimentaire" => Ok(Category::Food),
            "household" | "droguerie" => Ok(Category::Household),
            "apparel" | "habillement" => Ok(Category::Apparel),
            "leisure" | "loisir" => Ok(Category::Leisure),
            _ => Err(DomainError::validation(format!("unknown category: {s}"))),
        }
    }
}

/// One inventory record.
///
/// Records have no identity: equality is field by field, and names are not
/// required to be unique. The interchange keys are `Nom`, `Prix`, `Quantite`
/// and `Type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Nom")]
    name: String,
    /// Exact decimal price. Written as a JSON string to keep its scale;
    /// read from either a string or a number.
    #[serde(rename = "Prix")]
    price: Decimal,
    #[serde(rename = "Quantite")]
    quantity: u32,
    #[serde(rename = "Type")]
    category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Value of the stock held for this item (`price × quantity`), exact.
    pub fn stock_value(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Reduced name/price view of this item.
    pub fn price_view(&self) -> PriceView<'_> {
        PriceView {
            name: &self.name,
            price: self.price,
        }
    }
}

impl ValueObject for Item {}

/// Read-only projection of an [`Item`] keeping only its name and price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceView<'a> {
    pub name: &'a str,
    pub price: Decimal,
}

impl fmt::Display for PriceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Price: {}", self.name, self.price)
    }
}
