//! Product Grid Component
//!
//! One clickable card per catalogue product.

use leptos::prelude::*;

use crate::config::StorefrontConfig;
use crate::models::Product;
use crate::pricing::{format_price, image_url, product_page_url};

/// Single product card; clicking it opens the product page
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] uploads_prefix: String,
    #[prop(into)] product_page: String,
) -> impl IntoView {
    let href = product_page_url(&product_page, product.item_id);
    let open_product_page = move |_: web_sys::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&href);
        }
    };

    view! {
        <div class="product-card" id=product.item_id.to_string() on:click=open_product_page>
            <img src=image_url(&uploads_prefix, &product.image) alt=product.name.clone() />
            <h3>{product.name.clone()}</h3>
            <h5 style="float: right;">{format_price(product.price)}</h5>
        </div>
    }
}

#[component]
pub fn ProductGrid(products: Vec<Product>, config: StorefrontConfig) -> impl IntoView {
    products
        .into_iter()
        .map(|product| {
            view! {
                <ProductCard
                    product=product
                    uploads_prefix=config.uploads_prefix.clone()
                    product_page=config.product_page.clone()
                />
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            item_id: 1,
            name: "Blue Mug".to_string(),
            price: 999,
            image: "blue mug.png".to_string(),
        }
    }

    #[test]
    fn test_card_markup() {
        let html = Owner::new().with(|| {
            view! {
                <ProductCard product=mug() uploads_prefix="../static/uploads/" product_page="/product" />
            }
            .to_html()
        });

        assert!(html.contains(r#"class="product-card""#), "{html}");
        assert!(html.contains(r#"id="1""#), "{html}");
        assert!(html.contains(r#"src="../static/uploads/blue%20mug.png""#), "{html}");
        assert!(html.contains(r#"alt="Blue Mug""#), "{html}");
        assert!(html.contains("£9.99"), "{html}");
    }

    #[test]
    fn test_grid_one_card_per_product() {
        let mut lamp = mug();
        lamp.item_id = 2;
        lamp.name = "Lamp".to_string();

        let html = Owner::new().with(|| {
            view! { <ProductGrid products=vec![mug(), lamp] config=StorefrontConfig::default() /> }
                .to_html()
        });

        assert_eq!(html.matches(r#"class="product-card""#).count(), 2, "{html}");
        assert!(html.contains("Lamp"), "{html}");
    }
}
