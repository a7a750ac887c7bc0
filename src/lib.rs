//! Storefront UI
//!
//! Browser side of the shop: payment field masking, the product grid and
//! the basket, compiled to WebAssembly.

pub mod models;
pub mod config;
pub mod error;
pub mod pricing;
pub mod catalog;
pub mod basket;
pub mod api;
pub mod components;
pub mod render;
pub mod boot;

use wasm_bindgen::prelude::*;

use crate::basket::decode_basket_rows;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::when_dom_ready(|| boot::boot_page(boot::page_config()));
}

/// Fetch the product list and render it into `#productContainer`.
///
/// Boot already does this for product containers; pages calling it
/// themselves should mark the container `data-autoload="false"`.
#[wasm_bindgen(js_name = loadProductGrid)]
pub fn load_product_grid() {
    wasm_bindgen_futures::spawn_local(render::load_product_grid(boot::page_config()));
}

/// Render basket rows into `#basketContainer`.
///
/// `rows` is an array of `[name, unitPrice, image, itemId, maxQuantity,
/// quantity]` arrays; `total` is in minor units and shown as given.
#[wasm_bindgen(js_name = renderBasket)]
pub fn render_basket(rows: JsValue, total: f64) {
    let result = decode_basket_rows(rows)
        .and_then(|rows| render::render_basket(boot::page_config(), rows, total.round() as i64));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[BASKET] {}", e).into());
    }
}

/// Attach the card number, expiry and CVV masks
#[wasm_bindgen(js_name = bindCardForm)]
pub fn bind_card_form() {
    if let Err(e) = render::bind_card_form(&boot::page_config()) {
        web_sys::console::error_1(&format!("[CARD] {}", e).into());
    }
}
