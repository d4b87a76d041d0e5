use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::error::{dom_error, Result};

/// canvasからWebGL1コンテキストを取得する
///
/// ブラウザがWebGLを提供しない場合はnullが返るのでエラーにする
pub fn webgl(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext> {
    let ctx = canvas
        .get_context("webgl")
        .map_err(|e| dom_error("getContext failed", format!("{e:?}")))?
        .ok_or_else(|| dom_error("WebGL is not available", canvas.id()))?
        .dyn_into::<WebGlRenderingContext>()
        .map_err(|_| dom_error("Unexpected context type", canvas.id()))?;
    log::debug!(
        "webgl context acquired: {}x{}",
        canvas.client_width(),
        canvas.client_height()
    );
    Ok(ctx)
}
