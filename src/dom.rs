//! Thin helpers over `web_sys` globals so handlers can use `?` instead of
//! unwrapping the window/document chain at every call site.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// Sets the inline `overflow` of `<body>`; an empty value removes it.
pub fn set_body_overflow(value: &str) -> Result<(), DomError> {
    let style = body()?.style();
    if value.is_empty() {
        style.remove_property("overflow")?;
    } else {
        style.set_property("overflow", value)?;
    }
    Ok(())
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        assert_eq!(DomError::NoBody.to_string(), "document has no body");
        assert_eq!(
            DomError::Js("SyntaxError".to_string()).to_string(),
            "javascript error: SyntaxError"
        );
    }
}
