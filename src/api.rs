//! Backend API
//!
//! Fetch wrappers for the storefront endpoints.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::catalog::{parse_product_list, ProductListing};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};

/// GET `url` and parse the body as JSON
pub async fn get_json(url: &str) -> Result<serde_json::Value> {
    let window = web_sys::window().ok_or(StorefrontError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(StorefrontError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?).await?;
    let text = body.as_string().unwrap_or_default();
    Ok(serde_json::from_str(&text)?)
}

pub async fn list_products(config: &StorefrontConfig) -> Result<ProductListing> {
    let value = get_json(&config.products_endpoint).await?;
    parse_product_list(value)
}
