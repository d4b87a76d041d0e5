use std::str::FromStr;

use wasm_bindgen::prelude::*;

/// JS側から渡す実行設定
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct RunConfig {
    canvas_id: String,
    texture_url: String,
    log_level: log::Level,
}

#[wasm_bindgen]
impl RunConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_id(&self) -> String {
        self.canvas_id.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_canvas_id(&mut self, id: String) {
        self.canvas_id = id;
    }

    #[wasm_bindgen(getter)]
    pub fn texture_url(&self) -> String {
        self.texture_url.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_texture_url(&mut self, url: String) {
        self.texture_url = url;
    }

    #[wasm_bindgen(getter)]
    pub fn log_level(&self) -> String {
        self.log_level.to_string()
    }

    /// "error", "warn", "info", "debug", "trace"のいずれか
    #[wasm_bindgen(setter)]
    pub fn set_log_level(&mut self, level: String) -> Result<(), JsError> {
        self.log_level = log::Level::from_str(&level)
            .map_err(|_| JsError::new(&format!("Unknown log level: {level}")))?;
        Ok(())
    }
}

impl RunConfig {
    pub(crate) fn level(&self) -> log::Level {
        self.log_level
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            canvas_id: "game-canvas".to_owned(),
            texture_url: "crate.jpg".to_owned(),
            log_level: log::Level::Info,
        }
    }
}
