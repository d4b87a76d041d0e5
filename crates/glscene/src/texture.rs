use futures::channel::oneshot;

use crate::{
    error::TextureError,
    gl::{GlContext, ImageSource, TexParam},
};

/// 画像の読み込みが終わるまで表示する1x1の青色
pub const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 255, 255];

pub fn is_power_of_two(value: u32) -> bool {
    value != 0 && value & (value - 1) == 0
}

/// 読み込み側から画像を受け取るための送信口
pub type ImageSender<I> = oneshot::Sender<Result<I, TextureError>>;
pub type ImageReceiver<I> = oneshot::Receiver<Result<I, TextureError>>;

/// 画像の受け渡しチャネルを作る
pub fn image_channel<I>() -> (ImageSender<I>, ImageReceiver<I>) {
    oneshot::channel()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    /// 画像待ち。プレースホルダーを表示中
    Pending,
    Loaded,
    /// 読み込みに失敗したのでプレースホルダーのまま
    Failed,
}

/// テクスチャユニット0で使うテクスチャ
///
/// 生成時はプレースホルダーで埋め、受信した画像で一度だけ置き換える
pub struct TextureSlot<G: GlContext> {
    texture: G::Texture,
    pending: Option<ImageReceiver<G::Image>>,
    status: TextureStatus,
}

impl<G: GlContext> TextureSlot<G> {
    pub fn new(gl: &G, receiver: ImageReceiver<G::Image>) -> Result<Self, TextureError> {
        let texture = gl.create_texture().ok_or(TextureError::Create)?;
        gl.bind_texture(&texture);
        gl.tex_image_pixels(1, 1, &PLACEHOLDER_PIXEL)?;
        Ok(Self {
            texture,
            pending: Some(receiver),
            status: TextureStatus::Pending,
        })
    }

    pub fn status(&self) -> TextureStatus {
        self.status
    }

    /// 画像が届いていれば転送し、現在のテクスチャを返す
    pub fn current(&mut self, gl: &G) -> &G::Texture {
        if let Some(rx) = self.pending.as_mut() {
            match rx.try_recv() {
                Ok(None) => {}
                Ok(Some(Ok(image))) => {
                    self.pending = None;
                    self.status = match upload(gl, &self.texture, &image) {
                        Ok(()) => TextureStatus::Loaded,
                        Err(e) => {
                            log::warn!("{e}. keep placeholder texture");
                            TextureStatus::Failed
                        }
                    };
                }
                Ok(Some(Err(e))) => {
                    self.pending = None;
                    self.status = TextureStatus::Failed;
                    log::warn!("{e}. keep placeholder texture");
                }
                Err(oneshot::Canceled) => {
                    self.pending = None;
                    self.status = TextureStatus::Failed;
                    log::warn!("{}. keep placeholder texture", TextureError::Cancelled);
                }
            }
        }
        &self.texture
    }
}

// 2のべき乗サイズならミップマップ、それ以外はWebGL1の制約に合わせてCLAMP_TO_EDGEとLINEAR
fn upload<G: GlContext>(gl: &G, texture: &G::Texture, image: &G::Image) -> Result<(), TextureError> {
    gl.bind_texture(texture);
    gl.tex_image_source(image)?;

    let (w, h) = image.size();
    if is_power_of_two(w) && is_power_of_two(h) {
        gl.generate_mipmap();
    } else {
        gl.tex_parameter(TexParam::WrapSClampToEdge);
        gl.tex_parameter(TexParam::WrapTClampToEdge);
        gl.tex_parameter(TexParam::MinFilterLinear);
    }
    log::debug!("texture uploaded: {w}x{h}");
    Ok(())
}
