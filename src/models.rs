//! Storefront Models
//!
//! Data structures matching the backend payloads.

use serde::{Deserialize, Serialize};

/// Catalogue entry served by the product list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "itemid")]
    pub item_id: i64,
    pub name: String,
    /// Minor currency units
    pub price: i64,
    /// File name under the uploads directory
    pub image: String,
}

/// One basket line item.
///
/// The basket page hands rows over as positional arrays
/// `[name, unitPrice, image, itemId, maxQuantity, quantity]`; the checkout
/// page uses named objects. Both decode into this record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "BasketRowWire")]
pub struct BasketRow {
    pub name: String,
    /// Minor currency units
    pub unit_price: i64,
    pub image: String,
    pub item_id: i64,
    /// Stock available, upper bound of the quantity input
    pub max_quantity: i64,
    pub quantity: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BasketRowWire {
    Positional(String, i64, String, i64, i64, i64),
    Named {
        itemid: i64,
        name: String,
        price: i64,
        image: String,
        stock: i64,
        quantity: i64,
    },
}

impl From<BasketRowWire> for BasketRow {
    fn from(wire: BasketRowWire) -> Self {
        match wire {
            BasketRowWire::Positional(name, unit_price, image, item_id, max_quantity, quantity) => {
                Self { name, unit_price, image, item_id, max_quantity, quantity }
            }
            BasketRowWire::Named { itemid, name, price, image, stock, quantity } => Self {
                name,
                unit_price: price,
                image,
                item_id: itemid,
                max_quantity: stock,
                quantity,
            },
        }
    }
}
