//! 描画APIの抽象
//!
//! WebGL1で使う操作だけを切り出したトレイト。
//! ブラウザでは`webgl`フィーチャで`WebGlRenderingContext`に実装し、テストでは記録用の実装を使う。

use std::fmt;

use crate::error::TextureError;

/// シェーダーステージ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => f.write_str("vertex"),
            ShaderKind::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// ARRAY_BUFFER
    Array,
    /// ELEMENT_ARRAY_BUFFER
    ElementArray,
}

/// 頂点属性やインデックスの要素型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Float,
    UnsignedShort,
}

impl DataType {
    /// 1要素のバイト数
    pub const fn size(&self) -> usize {
        match self {
            DataType::Float => 4,
            DataType::UnsignedShort => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    TriangleStrip,
    Triangles,
}

/// テクスチャのパラメータ設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexParam {
    WrapSClampToEdge,
    WrapTClampToEdge,
    MinFilterLinear,
}

/// 頂点属性をバッファのどこから読むか
///
/// strideとoffsetはバイト単位。strideが0の場合は要素が詰めて並んでいるとみなす
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribLayout {
    pub components: i32,
    pub data_type: DataType,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
}

impl AttribLayout {
    /// 詰めて並んだf32の属性
    pub const fn floats(components: i32) -> Self {
        Self {
            components,
            data_type: DataType::Float,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }

    /// 1頂点に複数属性を並べたバッファ内の属性。引数はf32単位
    pub const fn interleaved(components: i32, stride_floats: i32, offset_floats: i32) -> Self {
        let size = DataType::Float.size() as i32;
        Self {
            components,
            data_type: DataType::Float,
            normalized: false,
            stride: stride_floats * size,
            offset: offset_floats * size,
        }
    }

    /// 実際に1頂点ごとに進むバイト数
    pub fn effective_stride(&self) -> usize {
        if self.stride == 0 {
            self.components as usize * self.data_type.size()
        } else {
            self.stride as usize
        }
    }

    /// GPUと同じstride/offset計算でCPU側の配列からindex番目の頂点を取り出す
    ///
    /// 範囲外の場合はNoneを返す
    pub fn fetch<'a>(&self, data: &'a [f32], index: usize) -> Option<&'a [f32]> {
        let size = DataType::Float.size();
        let start = (index * self.effective_stride() + self.offset as usize) / size;
        data.get(start..start + self.components as usize)
    }
}

/// 画像のサイズを返すことができる型
pub trait ImageSource {
    fn size(&self) -> (u32, u32);
}

/// 描画コンテキスト
///
/// メソッドはWebGL1の呼び出しとほぼ1対1に対応する。
/// オブジェクト生成に失敗した場合はNoneを返す
pub trait GlContext {
    type Shader;
    type Program;
    type Buffer;
    type Texture;
    type UniformLocation;
    type Image: ImageSource;

    // shader
    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    // program
    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);
    /// 見つからない場合は負の値
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    // buffer
    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: BufferTarget, buffer: &Self::Buffer);
    /// STATIC_DRAWでデータを転送する
    fn buffer_data(&self, target: BufferTarget, data: &[u8]);
    fn vertex_attrib_pointer(&self, location: u32, layout: &AttribLayout);
    fn enable_vertex_attrib_array(&self, location: u32);

    // uniform
    /// 列優先の4x4行列を転置なしで書き込む
    fn uniform_matrix4fv(&self, location: &Self::UniformLocation, data: &[f32]);
    fn uniform1i(&self, location: &Self::UniformLocation, value: i32);

    // texture
    fn create_texture(&self) -> Option<Self::Texture>;
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, texture: &Self::Texture);
    /// RGBA/UNSIGNED_BYTEの画素配列をlevel 0へ書き込む
    fn tex_image_pixels(&self, width: i32, height: i32, pixels: &[u8])
        -> Result<(), TextureError>;
    /// 読み込み済み画像をRGBA/UNSIGNED_BYTEでlevel 0へ書き込む
    fn tex_image_source(&self, image: &Self::Image) -> Result<(), TextureError>;
    fn generate_mipmap(&self);
    fn tex_parameter(&self, param: TexParam);

    // frame
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear_depth(&self, depth: f32);
    /// DEPTH_TESTを有効にして比較関数をLEQUALにする
    fn enable_depth_test(&self);
    /// カラーと深度バッファをクリアする
    fn clear(&self);
    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32);
    fn draw_elements(&self, mode: Primitive, count: i32, data_type: DataType, offset: i32);

    /// 描画先キャンバスの表示サイズ(clientWidth, clientHeight)
    fn canvas_size(&self) -> (u32, u32);
}
