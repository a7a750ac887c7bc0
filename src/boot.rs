//! Page Boot
//!
//! Wires whichever storefront pieces the current page has containers for.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::basket::parse_basket_rows;
use crate::config::{StorefrontConfig, CONFIG_ATTRIBUTE};
use crate::render;

/// Product container attribute; `"false"` leaves the grid load to page script
pub const AUTOLOAD_ATTRIBUTE: &str = "data-autoload";

/// Run `f` once the DOM is parsed
pub fn when_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let on_ready = Closure::once(f);
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}

/// Config for the current page, with overrides from `<body data-storefront-config>`
pub fn page_config() -> StorefrontConfig {
    let overrides = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

    StorefrontConfig::from_attribute(overrides.as_deref()).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[BOOT] Ignoring {}: {}", CONFIG_ATTRIBUTE, e).into());
        StorefrontConfig::default()
    })
}

pub fn boot_page(config: StorefrontConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.get_element_by_id(&config.ids.card_number).is_some() {
        if let Err(e) = render::bind_card_form(&config) {
            web_sys::console::error_1(&format!("[BOOT] Card form not bound: {}", e).into());
        }
    }

    if let Some(container) = document.get_element_by_id(&config.ids.basket_container) {
        boot_basket(&container, config.clone());
    }

    if let Some(container) = document.get_element_by_id(&config.ids.product_container) {
        if autoload_enabled(container.get_attribute(AUTOLOAD_ATTRIBUTE).as_deref()) {
            wasm_bindgen_futures::spawn_local(render::load_product_grid(config));
        }
    }
}

/// Only an explicit `"false"` turns the automatic grid load off
fn autoload_enabled(attribute: Option<&str>) -> bool {
    !attribute.is_some_and(|value| value.trim().eq_ignore_ascii_case("false"))
}

fn parse_total(attribute: Option<&str>) -> Option<i64> {
    attribute.and_then(|total| total.trim().parse::<i64>().ok())
}

/// Render a basket embedded as `data-items` / `data-total` attributes.
///
/// Containers without `data-items` are left for page script to fill.
fn boot_basket(container: &Element, config: StorefrontConfig) {
    let Some(items) = container.get_attribute("data-items") else {
        return;
    };
    let raw_total = container.get_attribute("data-total");
    let total = parse_total(raw_total.as_deref()).unwrap_or_else(|| {
        web_sys::console::warn_1(
            &format!("[BOOT] Basket data-total {:?} is not an integer, showing 0", raw_total).into(),
        );
        0
    });

    let result = parse_basket_rows(&items).and_then(|rows| render::render_basket(config, rows, total));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[BOOT] Basket not rendered: {}", e).into());
    }
}
