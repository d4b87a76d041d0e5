//! テスト用のGlContext実装
//!
//! 呼び出しを記録し、シェーダーソースの`attribute`/`uniform`宣言からロケーションを解決する

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::TextureError;
use crate::gl::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CompileShader(u32),
    DeleteShader(u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(u32),
    BindBuffer(BufferTarget, u32),
    BufferData(BufferTarget, usize),
    VertexAttribPointer(u32, AttribLayout),
    EnableVertexAttribArray(u32),
    UniformMatrix4fv(String, Vec<f32>),
    Uniform1i(String, i32),
    ActiveTexture(u32),
    BindTexture(u32),
    TexImagePixels(i32, i32, Vec<u8>),
    TexImageSource(u32, u32),
    GenerateMipmap,
    TexParameter(TexParam),
    ClearColor([f32; 4]),
    ClearDepth(f32),
    EnableDepthTest,
    Clear,
    DrawArrays(Primitive, i32, i32),
    DrawElements(Primitive, i32, DataType, i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeImage {
    pub width: u32,
    pub height: u32,
}

impl ImageSource for FakeImage {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Default)]
struct ProgramState {
    shaders: Vec<u32>,
    attributes: Vec<String>,
    uniforms: Vec<String>,
    linked: bool,
}

pub struct FakeGl {
    next_id: Cell<u32>,
    sources: RefCell<HashMap<u32, String>>,
    compiled: RefCell<HashMap<u32, bool>>,
    programs: RefCell<HashMap<u32, ProgramState>>,
    buffers: RefCell<HashMap<u32, Vec<u8>>>,
    bound: RefCell<HashMap<BufferTarget, u32>>,
    calls: RefCell<Vec<Call>>,
    pub fail_link: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub fail_upload: Cell<bool>,
    pub canvas: Cell<(u32, u32)>,
}

impl Default for FakeGl {
    fn default() -> Self {
        Self {
            next_id: Cell::new(1),
            sources: RefCell::default(),
            compiled: RefCell::default(),
            programs: RefCell::default(),
            buffers: RefCell::default(),
            bound: RefCell::default(),
            calls: RefCell::default(),
            fail_link: Cell::new(false),
            fail_create: Cell::new(false),
            fail_upload: Cell::new(false),
            canvas: Cell::new((640, 480)),
        }
    }
}

impl FakeGl {
    fn alloc(&self) -> Option<u32> {
        if self.fail_create.get() {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Some(id)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// バッファに転送されたデータをf32として読み出す
    pub fn buffer_f32(&self, id: u32) -> Vec<f32> {
        let buffers = self.buffers.borrow();
        let bytes = buffers.get(&id).map(Vec::as_slice).unwrap_or_default();
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    pub fn buffer_u16(&self, id: u32) -> Vec<u16> {
        let buffers = self.buffers.borrow();
        let bytes = buffers.get(&id).map(Vec::as_slice).unwrap_or_default();
        bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect()
    }

    // `attribute vec4 aVertexPosition;`のような宣言から名前を取り出す
    fn declared(source: &str, qualifier: &str) -> Vec<String> {
        source
            .lines()
            .map(str::trim)
            .filter(|l| l.split_whitespace().next() == Some(qualifier))
            .filter_map(|l| l.trim_end_matches(';').split_whitespace().last())
            .map(str::to_owned)
            .collect()
    }
}

impl GlContext for FakeGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type Texture = u32;
    type UniformLocation = String;
    type Image = FakeImage;

    fn create_shader(&self, _kind: ShaderKind) -> Option<u32> {
        self.alloc()
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.sources.borrow_mut().insert(*shader, source.to_owned());
    }

    fn compile_shader(&self, shader: &u32) {
        // #errorディレクティブを含むソースはコンパイル失敗とする
        let ok = self
            .sources
            .borrow()
            .get(shader)
            .is_some_and(|s| s.contains("void main") && !s.contains("#error"));
        self.compiled.borrow_mut().insert(*shader, ok);
        self.record(Call::CompileShader(*shader));
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.compiled.borrow().get(shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        Some(format!("ERROR: 0:1: shader {shader} rejected"))
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.programs.borrow_mut().insert(id, ProgramState::default());
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        if let Some(p) = self.programs.borrow_mut().get_mut(program) {
            p.shaders.push(*shader);
        }
    }

    fn link_program(&self, program: &u32) {
        let sources = self.sources.borrow();
        let mut programs = self.programs.borrow_mut();
        if let Some(p) = programs.get_mut(program) {
            let all: Vec<&String> = p.shaders.iter().filter_map(|s| sources.get(s)).collect();
            p.attributes = all.iter().flat_map(|s| Self::declared(s, "attribute")).collect();
            p.uniforms = all.iter().flat_map(|s| Self::declared(s, "uniform")).collect();
            p.linked = !self.fail_link.get() && p.shaders.len() == 2;
        }
        self.record(Call::LinkProgram(*program));
    }

    fn program_link_status(&self, program: &u32) -> bool {
        self.programs
            .borrow()
            .get(program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        Some("link rejected".to_owned())
    }

    fn delete_program(&self, program: &u32) {
        self.record(Call::DeleteProgram(*program));
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn attrib_location(&self, program: &u32, name: &str) -> i32 {
        self.programs
            .borrow()
            .get(program)
            .and_then(|p| p.attributes.iter().position(|a| a == name))
            .map_or(-1, |i| i as i32)
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<String> {
        self.programs
            .borrow()
            .get(program)
            .filter(|p| p.uniforms.iter().any(|u| u == name))
            .map(|_| name.to_owned())
    }

    fn create_buffer(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.buffers.borrow_mut().insert(id, Vec::new());
        Some(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &u32) {
        self.bound.borrow_mut().insert(target, *buffer);
        self.record(Call::BindBuffer(target, *buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        if let Some(id) = self.bound.borrow().get(&target) {
            self.buffers.borrow_mut().insert(*id, data.to_vec());
        }
        self.record(Call::BufferData(target, data.len()));
    }

    fn vertex_attrib_pointer(&self, location: u32, layout: &AttribLayout) {
        self.record(Call::VertexAttribPointer(location, *layout));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn uniform_matrix4fv(&self, location: &String, data: &[f32]) {
        self.record(Call::UniformMatrix4fv(location.clone(), data.to_vec()));
    }

    fn uniform1i(&self, location: &String, value: i32) {
        self.record(Call::Uniform1i(location.clone(), value));
    }

    fn create_texture(&self) -> Option<u32> {
        self.alloc()
    }

    fn active_texture(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn bind_texture(&self, texture: &u32) {
        self.record(Call::BindTexture(*texture));
    }

    fn tex_image_pixels(&self, width: i32, height: i32, pixels: &[u8]) -> Result<(), TextureError> {
        self.record(Call::TexImagePixels(width, height, pixels.to_vec()));
        Ok(())
    }

    fn tex_image_source(&self, image: &FakeImage) -> Result<(), TextureError> {
        if self.fail_upload.get() {
            return Err(TextureError::Upload("texImage2D rejected".to_owned()));
        }
        self.record(Call::TexImageSource(image.width, image.height));
        Ok(())
    }

    fn generate_mipmap(&self) {
        self.record(Call::GenerateMipmap);
    }

    fn tex_parameter(&self, param: TexParam) {
        self.record(Call::TexParameter(param));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(Call::ClearDepth(depth));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        self.record(Call::DrawArrays(mode, first, count));
    }

    fn draw_elements(&self, mode: Primitive, count: i32, data_type: DataType, offset: i32) {
        self.record(Call::DrawElements(mode, count, data_type, offset));
    }

    fn canvas_size(&self) -> (u32, u32) {
        self.canvas.get()
    }
}
