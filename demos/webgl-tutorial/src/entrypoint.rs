use std::str::FromStr;

use glscene::{
    error::TextureError,
    scene::DemoKind,
    texture::{image_channel, ImageSender},
    Animation, Scene,
};
use wasm_bindgen::prelude::*;
use web_host::{dom, frame::AnimationTicker, image::ImageLoader};
use web_sys::{HtmlImageElement, WebGlRenderingContext};

use crate::config::RunConfig;

fn init(config: &RunConfig) {
    web_host::set_panic_hook();
    // 2回目以降の呼び出しでは既にロガーが設定されている
    if console_log::init_with_level(config.level()).is_err() {
        log::debug!("logger already initialized");
    }
}

/// 画像を読み込み、結果を描画側に渡す
async fn load_image(url: String, sender: ImageSender<HtmlImageElement>) {
    let result = match ImageLoader::new(&url) {
        Ok(loader) => loader.await,
        Err(e) => Err(e),
    };
    let message = match result {
        Ok(image) => {
            log::info!("texture loaded: {url} ({}x{})", image.width(), image.height());
            Ok(image)
        }
        Err(e) => {
            log::warn!("{:?}", JsValue::from(e));
            Err(TextureError::Load(url))
        }
    };
    // 受け手が先に終了していれば何もしない
    let _ = sender.send(message);
}

fn build_scene(
    gl: &WebGlRenderingContext,
    kind: DemoKind,
    config: &RunConfig,
) -> Result<Scene<WebGlRenderingContext>, JsError> {
    if !kind.is_textured() {
        return Ok(Scene::new(gl, kind)?);
    }
    let (tx, rx) = image_channel();
    wasm_bindgen_futures::spawn_local(load_image(config.texture_url(), tx));
    Ok(Scene::textured(gl, rx)?)
}

async fn run_demo(kind: DemoKind, config: RunConfig) -> Result<(), JsError> {
    init(&config);
    log::info!("start {kind} on #{}", config.canvas_id());

    let canvas = dom::canvas(config.canvas_id())?;
    let gl = web_host::context::webgl(&canvas)?;
    let scene = build_scene(&gl, kind, &config)?;
    let mut animation = Animation::new(scene);

    if !animation.is_animated() {
        animation.render_once(&gl);
        return Ok(());
    }

    let mut ticker = AnimationTicker::default();
    loop {
        let ts = ticker.tick().await?;
        animation.frame(&gl, ts);
    }
}

/// 頂点ごとに色を持つ三角形を描く
#[wasm_bindgen]
pub async fn basic_triangle(config: Option<RunConfig>) -> Result<(), JsError> {
    run_demo(DemoKind::BasicTriangle, config.unwrap_or_default()).await
}

/// 位置と色を1つのバッファに詰めた三角形を描く
#[wasm_bindgen]
pub async fn basic_triangle_single_buffer(config: Option<RunConfig>) -> Result<(), JsError> {
    run_demo(DemoKind::BasicTriangleSingleBuffer, config.unwrap_or_default()).await
}

/// 回転する正方形
#[wasm_bindgen]
pub async fn square(config: Option<RunConfig>) -> Result<(), JsError> {
    run_demo(DemoKind::Square, config.unwrap_or_default()).await
}

/// 面ごとに色を塗った回転する立方体
#[wasm_bindgen]
pub async fn colored_cube(config: Option<RunConfig>) -> Result<(), JsError> {
    run_demo(DemoKind::ColoredCube, config.unwrap_or_default()).await
}

/// テクスチャを貼った回転する立方体
///
/// 画像の読み込みが終わるまでは青い1x1のテクスチャで描画する
#[wasm_bindgen]
pub async fn textured_cube(config: Option<RunConfig>) -> Result<(), JsError> {
    run_demo(DemoKind::TexturedCube, config.unwrap_or_default()).await
}

/// デモを名前で指定して起動する
#[wasm_bindgen]
pub async fn run(name: String, config: Option<RunConfig>) -> Result<(), JsError> {
    let kind = DemoKind::from_str(&name)?;
    run_demo(kind, config.unwrap_or_default()).await
}

/// 利用できるデモの名前
#[wasm_bindgen]
pub fn demo_names() -> Vec<String> {
    DemoKind::ALL.iter().map(|k| k.name().to_owned()).collect()
}
