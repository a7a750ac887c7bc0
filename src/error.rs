//! Storefront Errors

use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("no browser window available")]
    NoWindow,

    /// Element id absent, or not the expected element type
    #[error("element #{0} not found")]
    MissingElement(String),

    /// The fetch itself rejected (network, CORS, aborted)
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid data format: expected an array")]
    NotAnArray,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),
}

impl From<JsValue> for StorefrontError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        StorefrontError::Request(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StorefrontError::NotAnArray.to_string(),
            "invalid data format: expected an array"
        );
        assert_eq!(
            StorefrontError::MissingElement("basketContainer".into()).to_string(),
            "element #basketContainer not found"
        );
        assert_eq!(StorefrontError::Status(500).to_string(), "server responded with status 500");
    }

    #[test]
    fn test_json_conversion() {
        let err: StorefrontError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(err, StorefrontError::Json(_)));
    }
}
