//! Product List Validation
//!
//! The product endpoint returns untyped JSON; entries are shape-checked
//! before any of them reach the grid.

use serde_json::Value;

use crate::error::{Result, StorefrontError};
use crate::models::Product;

/// Products that passed validation, plus how many entries were dropped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub skipped: usize,
}

/// Field presence and primitive type check for one list entry
pub fn is_valid_product(value: &Value) -> bool {
    let Some(entry) = value.as_object() else {
        return false;
    };
    entry.get("itemid").is_some_and(Value::is_i64)
        && entry.get("name").is_some_and(Value::is_string)
        && entry.get("price").is_some_and(Value::is_i64)
        && entry.get("image").is_some_and(Value::is_string)
}

pub fn parse_product_list(value: Value) -> Result<ProductListing> {
    let Value::Array(entries) = value else {
        return Err(StorefrontError::NotAnArray);
    };

    let total = entries.len();
    let products: Vec<Product> = entries
        .into_iter()
        .filter(is_valid_product)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    Ok(ProductListing {
        skipped: total - products.len(),
        products,
    })
}
