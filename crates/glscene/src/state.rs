/// デモ毎の可変状態
///
/// フレーム間で変化するのは累積回転角だけ
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderState {
    rotation: f64,
}

impl RenderState {
    pub fn new(rotation: f64) -> Self {
        Self { rotation }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// 経過秒数を角度(ラジアン)として加算する
    pub fn advance(&mut self, delta_seconds: f64) {
        self.rotation += delta_seconds;
    }
}
