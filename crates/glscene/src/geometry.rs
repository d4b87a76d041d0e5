//! デモで使う静的な頂点データ

/// 三角形の頂点位置(xyz)
#[rustfmt::skip]
pub const TRIANGLE_POSITIONS: [f32; 9] = [
    -1.0, -1.0, 1.0,
     0.0,  1.0, 1.0,
     1.0, -1.0, 1.0,
];

/// 三角形の頂点色(rgba)
#[rustfmt::skip]
pub const TRIANGLE_COLORS: [f32; 12] = [
    1.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
];

/// 1頂点に位置3要素と色4要素を並べたもの
pub const INTERLEAVED_STRIDE: i32 = 7;
pub const INTERLEAVED_COLOR_OFFSET: i32 = 3;

#[rustfmt::skip]
pub const TRIANGLE_INTERLEAVED: [f32; 21] = [
    -1.0, -1.0, 1.0,  1.0, 0.0, 0.0, 1.0,
     0.0,  1.0, 1.0,  0.0, 1.0, 0.0, 1.0,
     1.0, -1.0, 1.0,  0.0, 0.0, 1.0, 1.0,
];

/// TRIANGLE_STRIPで描く正方形
#[rustfmt::skip]
pub const SQUARE_POSITIONS: [f32; 12] = [
    -1.0,  1.0, 1.0,
    -1.0, -1.0, 1.0,
     1.0,  1.0, 1.0,
     1.0, -1.0, 1.0,
];

#[rustfmt::skip]
pub const SQUARE_COLORS: [f32; 16] = [
    1.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
    1.0, 0.0, 1.0, 1.0,
];

/// 立方体の頂点位置。面毎に4頂点
#[rustfmt::skip]
pub const CUBE_POSITIONS: [f32; 72] = [
    // front
    -1.0, -1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,
    -1.0,  1.0,  1.0,
    // back
    -1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,
    // top
    -1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,
     1.0,  1.0, -1.0,
    // bottom
    -1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,
     1.0, -1.0,  1.0,
    -1.0, -1.0,  1.0,
    // right
     1.0, -1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0,  1.0,  1.0,
     1.0, -1.0,  1.0,
    // left
    -1.0, -1.0, -1.0,
    -1.0, -1.0,  1.0,
    -1.0,  1.0,  1.0,
    -1.0,  1.0, -1.0,
];

/// 面毎に2つの反時計回り三角形
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
     0,  1,  2,   0,  2,  3, // front
     4,  5,  6,   4,  6,  7, // back
     8,  9, 10,   8, 10, 11, // top
    12, 13, 14,  12, 14, 15, // bottom
    16, 17, 18,  16, 18, 19, // right
    20, 21, 22,  20, 22, 23, // left
];

#[rustfmt::skip]
pub const CUBE_TEXTURE_COORDS: [f32; 48] = [
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0, // front
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0, // back
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0, // top
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0, // bottom
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0, // right
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0, // left
];

/// 面の色。CUBE_POSITIONSの面の並びと同じ
pub const CUBE_FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

/// 面の色を4頂点ずつに展開した頂点色
pub fn cube_vertex_colors() -> Vec<f32> {
    CUBE_FACE_COLORS
        .iter()
        .flat_map(|c| std::iter::repeat_n(c, 4))
        .flatten()
        .copied()
        .collect()
}
