//! UI Components
//!
//! Leptos views mounted into the storefront page containers.

mod product_grid;
mod basket_view;

pub use product_grid::{ProductCard, ProductGrid};
pub use basket_view::{BasketContents, BasketItem};
