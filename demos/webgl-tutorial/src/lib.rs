//! WebGLチュートリアルのデモをwasmとして公開する

mod config;
mod entrypoint;

pub use config::RunConfig;
pub use entrypoint::*;
