//! WebGLチュートリアルのデモを1つのパラメータ化したレンダラで描く
//!
//! シェーダー構築、バッファ転送、フレーム描画、アニメーション駆動を
//! [gl::GlContext]の上に実装する。ブラウザでは`webgl`フィーチャを有効にする

pub mod buffer;
pub mod camera;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod state;
pub mod texture;

#[cfg(feature = "webgl")]
pub mod webgl;

#[cfg(test)]
pub(crate) mod testing;

pub use driver::Animation;
pub use error::{Error, Result};
pub use gl::GlContext;
pub use scene::{DemoKind, Scene};
