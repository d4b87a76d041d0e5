use crate::{
    error::ShaderError,
    gl::{GlContext, ShaderKind},
};

/// 頂点シェーダーとフラグメントシェーダーのソースの組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

pub const ATTR_POSITION: &str = "aVertexPosition";
pub const ATTR_COLOR: &str = "aVertexColor";
pub const ATTR_TEXTURE_COORDS: &str = "aTextureCoords";
pub const UNIFORM_MODEL_VIEW: &str = "uModelViewMatrix";
pub const UNIFORM_PROJECTION: &str = "uProjectionMatrix";
pub const UNIFORM_SAMPLER: &str = "uSampler";

/// 頂点カラーで塗るシェーダー
pub const COLORED: ShaderSource = ShaderSource {
    vertex: r#"
        attribute vec4 aVertexPosition;
        attribute vec4 aVertexColor;

        uniform mat4 uModelViewMatrix;
        uniform mat4 uProjectionMatrix;

        varying lowp vec4 vColor;
        void main() {
            gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
            vColor = aVertexColor;
        }
    "#,
    fragment: r#"
        varying lowp vec4 vColor;

        void main() {
            gl_FragColor = vColor;
        }
    "#,
};

/// テクスチャユニット0をサンプルするシェーダー
pub const TEXTURED: ShaderSource = ShaderSource {
    vertex: r#"
        attribute vec4 aVertexPosition;
        attribute vec2 aTextureCoords;

        uniform mat4 uModelViewMatrix;
        uniform mat4 uProjectionMatrix;

        varying highp vec2 vTextureCoords;
        void main() {
            gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
            vTextureCoords = aTextureCoords;
        }
    "#,
    fragment: r#"
        varying highp vec2 vTextureCoords;
        uniform sampler2D uSampler;
        void main() {
            gl_FragColor = texture2D(uSampler, vTextureCoords);
        }
    "#,
};

/// シェーダーをコンパイルする
///
/// 失敗時はシェーダーオブジェクトを削除し、ログ付きのエラーを返す
pub fn load_shader<G: GlContext>(
    gl: &G,
    kind: ShaderKind,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl.create_shader(kind).ok_or(ShaderError::Create(kind))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compile_status(&shader) {
        Ok(shader)
    } else {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(&shader);
        log::error!("{kind} shader compile error: {log}\n{source}");
        Err(ShaderError::Compile { kind, log })
    }
}

/// ソースの組からリンク済みプログラムを作る
pub fn init_shader_program<G: GlContext>(
    gl: &G,
    source: &ShaderSource,
) -> Result<G::Program, ShaderError> {
    let vs = load_shader(gl, ShaderKind::Vertex, source.vertex)?;
    let fs = match load_shader(gl, ShaderKind::Fragment, source.fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl.delete_shader(&vs);
            return Err(e);
        }
    };

    let result = link(gl, &vs, &fs);
    // リンク後はプログラムが参照を持つので、シェーダーは削除予約してよい
    gl.delete_shader(&vs);
    gl.delete_shader(&fs);
    result
}

fn link<G: GlContext>(
    gl: &G,
    vs: &G::Shader,
    fs: &G::Shader,
) -> Result<G::Program, ShaderError> {
    let program = gl.create_program().ok_or(ShaderError::CreateProgram)?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    if gl.program_link_status(&program) {
        Ok(program)
    } else {
        let log = gl.program_info_log(&program).unwrap_or_default();
        gl.delete_program(&program);
        log::error!("program link error: {log}");
        Err(ShaderError::Link(log))
    }
}

/// リンク済みプログラムと、名前で解決したロケーション
pub struct ProgramInfo<G: GlContext> {
    program: G::Program,
    attributes: Vec<(&'static str, u32)>,
    uniforms: Vec<(&'static str, G::UniformLocation)>,
}

impl<G: GlContext> ProgramInfo<G> {
    /// プログラムを構築し、指定した全ての属性とuniformを解決する
    ///
    /// 1つでも解決できない名前があればエラー
    pub fn new(
        gl: &G,
        source: &ShaderSource,
        attributes: &[&'static str],
        uniforms: &[&'static str],
    ) -> Result<Self, ShaderError> {
        let program = init_shader_program(gl, source)?;

        let attributes = attributes
            .iter()
            .map(|&name| match u32::try_from(gl.attrib_location(&program, name)) {
                Ok(loc) => Ok((name, loc)),
                Err(_) => Err(ShaderError::MissingAttribute(name.to_owned())),
            })
            .collect::<Result<Vec<_>, _>>();
        let uniforms = uniforms
            .iter()
            .map(|&name| {
                gl.uniform_location(&program, name)
                    .map(|loc| (name, loc))
                    .ok_or_else(|| ShaderError::MissingUniform(name.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>();

        match (attributes, uniforms) {
            (Ok(attributes), Ok(uniforms)) => {
                log::debug!("program ready: attributes={attributes:?}");
                Ok(Self {
                    program,
                    attributes,
                    uniforms,
                })
            }
            (Err(e), _) | (_, Err(e)) => {
                gl.delete_program(&program);
                Err(e)
            }
        }
    }

    pub fn program(&self) -> &G::Program {
        &self.program
    }

    pub fn attribute(&self, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, loc)| *loc)
    }

    pub fn uniform(&self, name: &str) -> Option<&G::UniformLocation> {
        self.uniforms
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, loc)| loc)
    }
}
