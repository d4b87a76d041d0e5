use wasm_bindgen::{JsCast, JsError};
use web_sys::{Document, HtmlCanvasElement, Performance, Window};

use crate::error::{dom_error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(JsError::new("window is None"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(JsError::new("document is None"))
}

/// 指定idの要素を型を指定して取得する
pub fn element<T: JsCast>(id: impl AsRef<str>) -> Result<T> {
    let id = id.as_ref();
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| dom_error("Element not found", id))?
        .dyn_into::<T>()
        .map_err(|_| dom_error("Unexpected element type", id))
}

/// 描画先のcanvas
pub fn canvas(id: impl AsRef<str>) -> Result<HtmlCanvasElement> {
    element::<HtmlCanvasElement>(id)
}

pub fn performance() -> Result<Performance> {
    window()?
        .performance()
        .ok_or(JsError::new("performance is None"))
}
