use std::f64::consts::TAU;

use nalgebra::{Matrix4, Perspective3, Unit, Vector3};

/// 投影行列を計算するための固定カメラ
///
/// 視点は原点で-Z方向を向く。物体の配置は[Transform]で行う
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// 縦方向の視野角(ラジアン)
    pub fovy: f32,
    /// 近距離、遠距離のものは描画対象にしないための制限
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fovy: 45.0_f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// キャンバスの表示サイズからアスペクト比を求める
    ///
    /// 非表示などでサイズが0の場合は1.0とする
    pub fn aspect(width: u32, height: u32) -> f32 {
        if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    /// OpenGL系の対称透視投影行列
    pub fn projection(&self, aspect: f32) -> Matrix4<f32> {
        Perspective3::new(aspect, self.fovy, self.znear, self.zfar).to_homogeneous()
    }
}

/// 累積角度に掛ける回転軸と倍率
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Unit<Vector3<f32>>,
    pub rate: f64,
}

impl Spin {
    pub fn new(axis: Unit<Vector3<f32>>, rate: f64) -> Self {
        Self { axis, rate }
    }
}

/// モデルビュー行列の組み立て
///
/// カメラ前方への平行移動のあと、spinsを順に適用する
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub offset: Vector3<f32>,
    pub spins: Vec<Spin>,
}

impl Transform {
    pub fn new(offset: Vector3<f32>, spins: Vec<Spin>) -> Self {
        Self { offset, spins }
    }

    /// angleは累積角(ラジアン)。軸毎に1周で畳んでからf32にする
    pub fn model_view(&self, angle: f64) -> Matrix4<f32> {
        self.spins.iter().fold(Matrix4::new_translation(&self.offset), |m, spin| {
            let theta = (angle * spin.rate).rem_euclid(TAU) as f32;
            m * Matrix4::from_axis_angle(&spin.axis, theta)
        })
    }
}
