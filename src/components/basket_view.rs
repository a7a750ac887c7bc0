//! Basket Components
//!
//! Line items with per-row quantity forms, followed by either the
//! empty-state message or the subtotal row.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::basket::{BasketFooter, BasketLine, BasketView};
use crate::config::StorefrontConfig;
use crate::pricing::image_url;

/// One basket row.
///
/// Changing the quantity posts the row's form, a full page submission.
#[component]
pub fn BasketItem(
    line: BasketLine,
    #[prop(into)] uploads_prefix: String,
    #[prop(into)] basket_action: String,
) -> impl IntoView {
    let submit_row = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(form) = input.form() {
            let _ = form.submit();
        }
    };

    view! {
        <div class="basket-item">
            <img src=image_url(&uploads_prefix, &line.image) alt=line.name.clone() />
            <div class="item-details">
                <strong>{line.name.clone()}</strong>
                <br />
                "Price: "
                {line.unit_price.clone()}
                <br />
                <form action=basket_action method="post" id=line.form_id()>
                    <label>"Quantity:  "</label>
                    <input value=line.item_id.to_string() name="itemid" hidden=true />
                    <input
                        type="number"
                        value=line.quantity.to_string()
                        min="0"
                        max=line.max_quantity.to_string()
                        name="new_quantity"
                        on:change=submit_row
                    />
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn BasketContents(basket: BasketView, config: StorefrontConfig) -> impl IntoView {
    let BasketView { lines, footer } = basket;

    let items = lines
        .into_iter()
        .map(|line| {
            view! {
                <BasketItem
                    line=line
                    uploads_prefix=config.uploads_prefix.clone()
                    basket_action=config.basket_action.clone()
                />
            }
        })
        .collect_view();

    let footer = match footer {
        BasketFooter::Empty => view! {
            <div class="basket-item">
                <strong>"Your basket is currently empty"</strong>
                <a href=config.catalog_page.clone()>"Continue Shopping"</a>
            </div>
        }
        .into_any(),
        BasketFooter::Summary { subtotal } => view! {
            <div class="basket-item">
                <strong>"Subtotal: " {subtotal}</strong>
                <a href=config.checkout_page.clone() id="checkoutBtn">"Checkout"</a>
            </div>
        }
        .into_any(),
    };

    view! {
        {items}
        {footer}
    }
}
