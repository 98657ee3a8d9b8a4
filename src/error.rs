//! Error type for installer failures.
//!
//! Missing page elements are not errors; installers skip them silently. A
//! `SiteError` only describes a browser call that failed outright.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let text = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        SiteError::Js(text)
    }
}

// Failed `dyn_into` casts hand back the original element.
impl From<web_sys::Element> for SiteError {
    fn from(el: web_sys::Element) -> Self {
        SiteError::Js(format!("unexpected <{}> element", el.tag_name().to_lowercase()))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(SiteError::NoWindow.to_string(), "no window");
        assert_eq!(
            SiteError::Config("bad date".into()).to_string(),
            "invalid configuration: bad date"
        );
    }
}
