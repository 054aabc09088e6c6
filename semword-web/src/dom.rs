use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
///
/// Always `None` off `wasm32`, so server-side rendering never touches JS.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `<html>` element, whose classes carry page-wide themes.
#[must_use]
pub fn root_element() -> Option<Element> {
    document().and_then(|doc| doc.document_element())
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// The browser `localStorage` handle, when the page may use it.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Whether the OS asks for a dark color scheme.
#[must_use]
pub fn prefers_dark_scheme() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}
