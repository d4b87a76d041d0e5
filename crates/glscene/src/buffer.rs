use crate::{
    error::BufferError,
    gl::{AttribLayout, BufferTarget, GlContext},
};

// バッファを作って転送する共通処理
fn create_with_data<G: GlContext>(
    gl: &G,
    target: BufferTarget,
    contents: &[u8],
) -> Result<G::Buffer, BufferError> {
    let buf = gl.create_buffer().ok_or(BufferError::Create)?;
    gl.bind_buffer(target, &buf);
    gl.buffer_data(target, contents);
    Ok(buf)
}

/// 一度だけ書き込む頂点属性バッファ
///
/// 配列長とレイアウトの整合性は検査しない。stride/offsetの計算は呼び出し側の責任
pub struct VertexBuffer<G: GlContext> {
    buf: G::Buffer,
    len: usize,
}

impl<G: GlContext> VertexBuffer<G> {
    pub fn new(gl: &G, data: &[f32]) -> Result<Self, BufferError> {
        let buf = create_with_data(gl, BufferTarget::Array, bytemuck::cast_slice(data))?;
        Ok(Self {
            buf,
            len: data.len(),
        })
    }

    /// 属性としてバインドする
    pub fn bind_attrib(&self, gl: &G, location: u32, layout: &AttribLayout) {
        gl.bind_buffer(BufferTarget::Array, &self.buf);
        gl.vertex_attrib_pointer(location, layout);
        gl.enable_vertex_attrib_array(location);
    }

    pub fn buffer(&self) -> &G::Buffer {
        &self.buf
    }

    /// f32の要素数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// u16のインデックスバッファ
pub struct IndexBuffer<G: GlContext> {
    buf: G::Buffer,
    count: usize,
}

impl<G: GlContext> IndexBuffer<G> {
    pub fn new(gl: &G, indices: &[u16]) -> Result<Self, BufferError> {
        let buf = create_with_data(gl, BufferTarget::ElementArray, bytemuck::cast_slice(indices))?;
        Ok(Self {
            buf,
            count: indices.len(),
        })
    }

    pub fn bind(&self, gl: &G) {
        gl.bind_buffer(BufferTarget::ElementArray, &self.buf);
    }

    pub fn buffer(&self) -> &G::Buffer {
        &self.buf
    }

    /// 描画時に渡すインデックス数
    pub fn count(&self) -> usize {
        self.count
    }
}
