//! Storefront Configuration
//!
//! Endpoint paths, asset prefixes and DOM ids the page scripts rely on.

use serde::Deserialize;

/// `<body>` attribute holding JSON overrides for [`StorefrontConfig`]
pub const CONFIG_ATTRIBUTE: &str = "data-storefront-config";

/// Element ids expected on the storefront pages
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub card_number: String,
    pub card_logo: String,
    pub expiry: String,
    pub cvv: String,
    pub product_container: String,
    pub basket_container: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            card_number: "card-number".to_string(),
            card_logo: "card-logo".to_string(),
            expiry: "expiry".to_string(),
            cvv: "cvv".to_string(),
            product_container: "productContainer".to_string(),
            basket_container: "basketContainer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// GET, returns the product list
    pub products_endpoint: String,
    /// Per-product page, addressed by `?id=`
    pub product_page: String,
    /// Quantity update form target
    pub basket_action: String,
    pub checkout_page: String,
    pub catalog_page: String,
    /// Product images
    pub uploads_prefix: String,
    /// Card logos and other static art
    pub resources_prefix: String,
    pub ids: DomIds,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            products_endpoint: "/api/products".to_string(),
            product_page: "/product".to_string(),
            basket_action: "/basket".to_string(),
            checkout_page: "/checkout".to_string(),
            catalog_page: "/".to_string(),
            uploads_prefix: "../static/uploads/".to_string(),
            resources_prefix: "../static/resources/".to_string(),
            ids: DomIds::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse overrides; absent fields keep their defaults
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config from the page's override attribute; absent or blank means defaults
    pub fn from_attribute(value: Option<&str>) -> crate::error::Result<Self> {
        match value {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn card_form_ids(&self) -> card_input_mask::CardFormIds<'_> {
        card_input_mask::CardFormIds {
            number: &self.ids.card_number,
            logo: &self.ids.card_logo,
            expiry: &self.ids.expiry,
            cvv: &self.ids.cvv,
        }
    }
}
