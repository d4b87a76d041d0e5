use wasm_bindgen::JsError;

/// JS側に返すエラーはJsErrorにまとめる
pub type Result<T> = std::result::Result<T, JsError>;

/// 要素が見つからない、型が違うなどDOM操作の失敗
pub(crate) fn dom_error(what: &str, detail: impl AsRef<str>) -> JsError {
    JsError::new(&format!("{what}: {}", detail.as_ref()))
}
