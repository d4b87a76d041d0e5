use crate::{gl::ShaderKind, scene::DemoKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
    #[error("{0} needs an image receiver")]
    ImageRequired(DemoKind),
}

/// シェーダーのコンパイルからロケーション解決までのエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShaderError {
    #[error("Failed to create {0} shader object")]
    Create(ShaderKind),
    #[error("Failed to compile {kind} shader: {log}")]
    Compile { kind: ShaderKind, log: String },
    #[error("Failed to create program object")]
    CreateProgram,
    #[error("Failed to link program: {0}")]
    Link(String),
    #[error("Attribute not found: {0}")]
    MissingAttribute(String),
    #[error("Uniform not found: {0}")]
    MissingUniform(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BufferError {
    #[error("Failed to create buffer object")]
    Create,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextureError {
    #[error("Failed to create texture object")]
    Create,
    #[error("Failed to upload texture: {0}")]
    Upload(String),
    #[error("Failed to load image: {0}")]
    Load(String),
    #[error("Image loader dropped before completion")]
    Cancelled,
}
