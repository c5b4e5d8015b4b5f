use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("No window object")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("No root element")]
    NoRootElement,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Clipboard API is not available")]
    ClipboardUnavailable,
    #[error("Could not copy text: {0}")]
    Clipboard(String),
    #[error("Invalid site config: {0}")]
    Config(String),
}

impl SiteError {
    pub fn js(value: JsValue) -> Self {
        SiteError::Js(describe_js(&value))
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::js(value)
    }
}

pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
