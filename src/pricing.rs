//! Display Formatting
//!
//! Prices, asset URLs and navigation targets.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Minor units to pounds, e.g. `999` -> `£9.99`
pub fn format_price(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("£{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Asset URL with the server-supplied file name encoded as one path segment
pub fn image_url(prefix: &str, file: &str) -> String {
    format!("{}{}", prefix, utf8_percent_encode(file, URI_COMPONENT))
}

pub fn product_page_url(product_page: &str, item_id: i64) -> String {
    format!("{}?id={}", product_page, item_id)
}
