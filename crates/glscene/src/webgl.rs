//! WebGL1コンテキストへのGlContext実装

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl,
    WebGlShader, WebGlTexture, WebGlUniformLocation,
};

use crate::{
    error::TextureError,
    gl::{AttribLayout, BufferTarget, DataType, GlContext, ImageSource, Primitive, ShaderKind, TexParam},
};

impl ImageSource for HtmlImageElement {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

const fn shader_kind(kind: ShaderKind) -> u32 {
    match kind {
        ShaderKind::Vertex => Gl::VERTEX_SHADER,
        ShaderKind::Fragment => Gl::FRAGMENT_SHADER,
    }
}

const fn buffer_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => Gl::ARRAY_BUFFER,
        BufferTarget::ElementArray => Gl::ELEMENT_ARRAY_BUFFER,
    }
}

const fn data_type(ty: DataType) -> u32 {
    match ty {
        DataType::Float => Gl::FLOAT,
        DataType::UnsignedShort => Gl::UNSIGNED_SHORT,
    }
}

const fn primitive(mode: Primitive) -> u32 {
    match mode {
        Primitive::TriangleStrip => Gl::TRIANGLE_STRIP,
        Primitive::Triangles => Gl::TRIANGLES,
    }
}

impl GlContext for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Texture = WebGlTexture;
    type UniformLocation = WebGlUniformLocation;
    type Image = HtmlImageElement;

    fn create_shader(&self, kind: ShaderKind) -> Option<WebGlShader> {
        Gl::create_shader(self, shader_kind(kind))
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        Gl::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        Gl::compile_shader(self, shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        Gl::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        Gl::link_program(self, program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        Gl::delete_program(self, Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        Gl::use_program(self, Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        Gl::create_buffer(self)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &WebGlBuffer) {
        Gl::bind_buffer(self, buffer_target(target), Some(buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.buffer_data_with_u8_array(buffer_target(target), data, Gl::STATIC_DRAW);
    }

    fn vertex_attrib_pointer(&self, location: u32, layout: &AttribLayout) {
        self.vertex_attrib_pointer_with_i32(
            location,
            layout.components,
            data_type(layout.data_type),
            layout.normalized,
            layout.stride,
            layout.offset,
        );
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        Gl::enable_vertex_attrib_array(self, location);
    }

    fn uniform_matrix4fv(&self, location: &WebGlUniformLocation, data: &[f32]) {
        self.uniform_matrix4fv_with_f32_array(Some(location), false, data);
    }

    fn uniform1i(&self, location: &WebGlUniformLocation, value: i32) {
        Gl::uniform1i(self, Some(location), value);
    }

    fn create_texture(&self) -> Option<WebGlTexture> {
        Gl::create_texture(self)
    }

    fn active_texture(&self, unit: u32) {
        Gl::active_texture(self, Gl::TEXTURE0 + unit);
    }

    fn bind_texture(&self, texture: &WebGlTexture) {
        Gl::bind_texture(self, Gl::TEXTURE_2D, Some(texture));
    }

    fn tex_image_pixels(&self, width: i32, height: i32, pixels: &[u8]) -> Result<(), TextureError> {
        self.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            Gl::TEXTURE_2D,
            0,
            Gl::RGBA as i32,
            width,
            height,
            0,
            Gl::RGBA,
            Gl::UNSIGNED_BYTE,
            Some(pixels),
        )
        .map_err(|e| TextureError::Upload(format!("{e:?}")))
    }

    fn tex_image_source(&self, image: &HtmlImageElement) -> Result<(), TextureError> {
        self.tex_image_2d_with_u32_and_u32_and_image(
            Gl::TEXTURE_2D,
            0,
            Gl::RGBA as i32,
            Gl::RGBA,
            Gl::UNSIGNED_BYTE,
            image,
        )
        .map_err(|e| TextureError::Upload(format!("{e:?}")))
    }

    fn generate_mipmap(&self) {
        Gl::generate_mipmap(self, Gl::TEXTURE_2D);
    }

    fn tex_parameter(&self, param: TexParam) {
        let (pname, value) = match param {
            TexParam::WrapSClampToEdge => (Gl::TEXTURE_WRAP_S, Gl::CLAMP_TO_EDGE),
            TexParam::WrapTClampToEdge => (Gl::TEXTURE_WRAP_T, Gl::CLAMP_TO_EDGE),
            TexParam::MinFilterLinear => (Gl::TEXTURE_MIN_FILTER, Gl::LINEAR),
        };
        self.tex_parameteri(Gl::TEXTURE_2D, pname, value as i32);
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        Gl::clear_color(self, r, g, b, a);
    }

    fn clear_depth(&self, depth: f32) {
        Gl::clear_depth(self, depth);
    }

    fn enable_depth_test(&self) {
        self.enable(Gl::DEPTH_TEST);
        self.depth_func(Gl::LEQUAL);
    }

    fn clear(&self) {
        Gl::clear(self, Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        Gl::draw_arrays(self, primitive(mode), first, count);
    }

    fn draw_elements(&self, mode: Primitive, count: i32, ty: DataType, offset: i32) {
        self.draw_elements_with_i32(primitive(mode), count, data_type(ty), offset);
    }

    fn canvas_size(&self) -> (u32, u32) {
        self.canvas()
            .and_then(|c| c.dyn_into::<HtmlCanvasElement>().ok())
            .map_or((0, 0), |c| (c.client_width().max(0) as u32, c.client_height().max(0) as u32))
    }
}
