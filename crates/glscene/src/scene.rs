use std::{fmt, str::FromStr};

use nalgebra::Vector3;

use crate::{
    buffer::{IndexBuffer, VertexBuffer},
    camera::{Spin, Transform},
    error::{Error, Result},
    geometry,
    gl::{AttribLayout, DataType, GlContext, Primitive},
    shader::{self, ProgramInfo},
    texture::{ImageReceiver, TextureSlot},
};

/// デモの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    /// 位置と色を別バッファに持つ三角形
    BasicTriangle,
    /// 位置と色を1つのバッファに交互に持つ三角形
    BasicTriangleSingleBuffer,
    Square,
    ColoredCube,
    TexturedCube,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::BasicTriangle,
        DemoKind::BasicTriangleSingleBuffer,
        DemoKind::Square,
        DemoKind::ColoredCube,
        DemoKind::TexturedCube,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::BasicTriangle => "basic-triangle",
            DemoKind::BasicTriangleSingleBuffer => "basic-triangle-single-buffer",
            DemoKind::Square => "square",
            DemoKind::ColoredCube => "colored-cube",
            DemoKind::TexturedCube => "textured-cube",
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self, DemoKind::TexturedCube)
    }

    /// デモ毎の固定パラメータ
    pub fn params(&self) -> SceneParams {
        let z = Vector3::z_axis();
        let y = Vector3::y_axis();
        let cube_spins = vec![Spin::new(z, 1.0), Spin::new(y, 0.7)];
        match self {
            DemoKind::BasicTriangle => SceneParams::still(SceneParams::BLACK, -6.0),
            DemoKind::BasicTriangleSingleBuffer => {
                SceneParams::still([0.9, 0.9, 0.9, 1.0], -6.0)
            }
            DemoKind::Square => SceneParams {
                clear_color: SceneParams::BLACK,
                transform: Transform::new(Vector3::new(0.0, 0.0, -5.0), vec![Spin::new(z, 1.0)]),
                initial_rotation: 2.0,
                animated: true,
            },
            DemoKind::ColoredCube | DemoKind::TexturedCube => SceneParams {
                clear_color: SceneParams::BLACK,
                transform: Transform::new(Vector3::new(0.0, 0.0, -6.0), cube_spins),
                initial_rotation: 0.0,
                animated: true,
            },
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown demo: {0}")]
pub struct UnknownDemo(pub String);

impl FromStr for DemoKind {
    type Err = UnknownDemo;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownDemo(s.to_owned()))
    }
}

/// 描画の固定値
#[derive(Debug, Clone, PartialEq)]
pub struct SceneParams {
    pub clear_color: [f32; 4],
    pub transform: Transform,
    pub initial_rotation: f64,
    /// falseなら1度だけ描画する
    pub animated: bool,
}

impl SceneParams {
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    fn still(clear_color: [f32; 4], z: f32) -> Self {
        Self {
            clear_color,
            transform: Transform::new(Vector3::new(0.0, 0.0, z), Vec::new()),
            initial_rotation: 0.0,
            animated: false,
        }
    }
}

/// 頂点属性と、それを読むバッファの対応
pub struct AttribBinding {
    pub location: u32,
    /// Scene::buffersの添字
    pub buffer: usize,
    pub layout: AttribLayout,
}

pub enum DrawCall<G: GlContext> {
    Arrays { mode: Primitive, count: i32 },
    Elements { mode: Primitive, indices: IndexBuffer<G> },
}

/// 初期化済みのGPUリソース一式
///
/// プログラムとバッファは作成後に変更しない
pub struct Scene<G: GlContext> {
    pub kind: DemoKind,
    pub params: SceneParams,
    pub program: ProgramInfo<G>,
    pub buffers: Vec<VertexBuffer<G>>,
    pub attribs: Vec<AttribBinding>,
    pub draw: DrawCall<G>,
    pub texture: Option<TextureSlot<G>>,
}

const MATRIX_UNIFORMS: [&str; 2] = [shader::UNIFORM_MODEL_VIEW, shader::UNIFORM_PROJECTION];

impl<G: GlContext> Scene<G> {
    /// 頂点色で描くデモを構築する
    ///
    /// テクスチャを使うデモは[Scene::textured]を使う
    pub fn new(gl: &G, kind: DemoKind) -> Result<Self> {
        let attrs = [shader::ATTR_POSITION, shader::ATTR_COLOR];
        let colors = geometry::cube_vertex_colors();
        let separate = || vec![(0, AttribLayout::floats(3)), (1, AttribLayout::floats(4))];
        let mesh = match kind {
            DemoKind::BasicTriangle => Mesh {
                sources: vec![&geometry::TRIANGLE_POSITIONS[..], &geometry::TRIANGLE_COLORS[..]],
                layouts: separate(),
                draw: Draw::Strip(3),
            },
            DemoKind::BasicTriangleSingleBuffer => Mesh {
                sources: vec![&geometry::TRIANGLE_INTERLEAVED[..]],
                layouts: vec![
                    (0, AttribLayout::interleaved(3, geometry::INTERLEAVED_STRIDE, 0)),
                    (
                        0,
                        AttribLayout::interleaved(
                            4,
                            geometry::INTERLEAVED_STRIDE,
                            geometry::INTERLEAVED_COLOR_OFFSET,
                        ),
                    ),
                ],
                draw: Draw::Strip(3),
            },
            DemoKind::Square => Mesh {
                sources: vec![&geometry::SQUARE_POSITIONS[..], &geometry::SQUARE_COLORS[..]],
                layouts: separate(),
                draw: Draw::Strip(4),
            },
            DemoKind::ColoredCube => Mesh {
                sources: vec![&geometry::CUBE_POSITIONS[..], &colors[..]],
                layouts: separate(),
                draw: Draw::Cube,
            },
            DemoKind::TexturedCube => return Err(Error::ImageRequired(kind)),
        };

        let program = ProgramInfo::new(gl, &shader::COLORED, &attrs, &MATRIX_UNIFORMS)?;
        Self::assemble(gl, kind, program, &attrs, mesh, None)
    }

    /// テクスチャ付き立方体を構築する
    ///
    /// receiverに画像が届くまではプレースホルダーで描画する
    pub fn textured(gl: &G, receiver: ImageReceiver<G::Image>) -> Result<Self> {
        let attrs = [shader::ATTR_POSITION, shader::ATTR_TEXTURE_COORDS];
        let uniforms = [
            shader::UNIFORM_MODEL_VIEW,
            shader::UNIFORM_PROJECTION,
            shader::UNIFORM_SAMPLER,
        ];
        let program = ProgramInfo::new(gl, &shader::TEXTURED, &attrs, &uniforms)?;
        let texture = TextureSlot::new(gl, receiver)?;
        let mesh = Mesh {
            sources: vec![&geometry::CUBE_POSITIONS[..], &geometry::CUBE_TEXTURE_COORDS[..]],
            layouts: vec![(0, AttribLayout::floats(3)), (1, AttribLayout::floats(2))],
            draw: Draw::Cube,
        };
        Self::assemble(gl, DemoKind::TexturedCube, program, &attrs, mesh, Some(texture))
    }

    fn assemble(
        gl: &G,
        kind: DemoKind,
        program: ProgramInfo<G>,
        attrs: &[&'static str],
        mesh: Mesh<'_>,
        texture: Option<TextureSlot<G>>,
    ) -> Result<Self> {
        let Mesh {
            sources,
            layouts,
            draw,
        } = mesh;
        let buffers = sources
            .iter()
            .map(|data| VertexBuffer::new(gl, data))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // ProgramInfo::newで全ての名前を解決済み
        let attribs = attrs
            .iter()
            .zip(&layouts)
            .filter_map(|(name, (buffer, layout))| {
                program.attribute(name).map(|location| AttribBinding {
                    location,
                    buffer: *buffer,
                    layout: *layout,
                })
            })
            .collect();

        let draw = match draw {
            Draw::Strip(count) => DrawCall::Arrays {
                mode: Primitive::TriangleStrip,
                count,
            },
            Draw::Cube => DrawCall::Elements {
                mode: Primitive::Triangles,
                indices: IndexBuffer::new(gl, &geometry::CUBE_INDICES)?,
            },
        };

        log::debug!("scene ready: {kind}");
        Ok(Self {
            kind,
            params: kind.params(),
            program,
            buffers,
            attribs,
            draw,
            texture,
        })
    }

    /// インデックス描画の要素型
    pub fn index_type(&self) -> DataType {
        DataType::UnsignedShort
    }
}

// 構築途中の頂点データ。layoutsは(sourcesの添字, レイアウト)で属性と同じ順
struct Mesh<'a> {
    sources: Vec<&'a [f32]>,
    layouts: Vec<(usize, AttribLayout)>,
    draw: Draw,
}

// 構築途中の描画方法
enum Draw {
    Strip(i32),
    Cube,
}
