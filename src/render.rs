//! Container Rendering
//!
//! Mounts the storefront views into page containers. Every render fully
//! replaces the container's content; nothing is merged.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::api;
use crate::basket::BasketView;
use crate::components::{BasketContents, ProductGrid};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::models::BasketRow;

thread_local! {
    /// Live mount per container id; dropping one unmounts its view
    static MOUNTED: RefCell<HashMap<String, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Find an element by id, typed as `T`
pub fn find_element<T: JsCast>(id: &str) -> Result<T> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StorefrontError::NoWindow)?;
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| StorefrontError::MissingElement(id.to_string()))
}

/// Replace everything inside `container` with the view built by `f`
pub fn replace_contents<F, N>(container: HtmlElement, key: &str, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
    N::State: 'static,
{
    let previous = MOUNTED.with_borrow_mut(|mounted| mounted.remove(key));
    drop(previous);

    container.set_inner_html("");
    let handle = leptos::mount::mount_to(container, f);
    MOUNTED.with_borrow_mut(|mounted| {
        mounted.insert(key.to_string(), Box::new(handle));
    });
}

/// Fetch the catalogue and paint it into the product container.
///
/// Failures are logged; the grid keeps whatever it showed before.
pub async fn load_product_grid(config: StorefrontConfig) {
    match try_load_product_grid(config).await {
        Ok(count) => {
            web_sys::console::log_1(&format!("[GRID] Rendered {} products", count).into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading products: {}", e).into());
        }
    }
}

async fn try_load_product_grid(config: StorefrontConfig) -> Result<usize> {
    let listing = api::list_products(&config).await?;
    if listing.skipped > 0 {
        web_sys::console::warn_1(&"Some products were invalid and skipped".into());
    }

    let container: HtmlElement = find_element(&config.ids.product_container)?;
    let key = config.ids.product_container.clone();
    let count = listing.products.len();
    let products = listing.products;
    replace_contents(container, &key, move || {
        view! { <ProductGrid products=products config=config /> }
    });
    Ok(count)
}

/// Paint basket rows and the caller's total into the basket container
pub fn render_basket(config: StorefrontConfig, rows: Vec<BasketRow>, total: i64) -> Result<()> {
    let container: HtmlElement = find_element(&config.ids.basket_container)?;
    let key = config.ids.basket_container.clone();
    let basket = BasketView::new(rows, total);
    web_sys::console::log_1(&format!("[BASKET] Rendering {} rows", basket.lines.len()).into());
    replace_contents(container, &key, move || {
        view! { <BasketContents basket=basket config=config /> }
    });
    Ok(())
}

/// Attach the payment field masks to the card form
pub fn bind_card_form(config: &StorefrontConfig) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StorefrontError::NoWindow)?;
    let elements = card_input_mask::CardFormElements::from_document(&document, &config.card_form_ids())
        .map_err(StorefrontError::MissingElement)?;
    card_input_mask::bind_card_form(&elements, &config.resources_prefix);
    web_sys::console::log_1(&"[CARD] Payment field masks bound".into());
    Ok(())
}
