use crate::{
    camera::Camera,
    gl::GlContext,
    scene::{DrawCall, Scene},
    shader,
    state::RenderState,
};

/// 1フレームを描画する
///
/// 順序はクリア、投影行列、モデルビュー行列、属性バインド、テクスチャ、描画の順で固定。
/// アニメーションするシーンでは描画後にdelta_secondsだけ回転角を進める
pub fn render_frame<G: GlContext>(
    gl: &G,
    scene: &mut Scene<G>,
    state: &mut RenderState,
    camera: &Camera,
    delta_seconds: f64,
) {
    let params = &scene.params;
    gl.clear_color(params.clear_color);
    gl.clear_depth(1.0);
    gl.enable_depth_test();
    gl.clear();

    // キャンバスサイズは毎フレーム取り直す
    let (w, h) = gl.canvas_size();
    let projection = camera.projection(Camera::aspect(w, h));
    let model_view = params.transform.model_view(state.rotation());

    for a in scene.attribs.iter() {
        scene.buffers[a.buffer].bind_attrib(gl, a.location, &a.layout);
    }
    if let DrawCall::Elements { indices, .. } = &scene.draw {
        indices.bind(gl);
    }

    let program = &scene.program;
    gl.use_program(program.program());
    if let Some(loc) = program.uniform(shader::UNIFORM_PROJECTION) {
        gl.uniform_matrix4fv(loc, projection.as_slice());
    }
    if let Some(loc) = program.uniform(shader::UNIFORM_MODEL_VIEW) {
        gl.uniform_matrix4fv(loc, model_view.as_slice());
    }

    if let Some(slot) = scene.texture.as_mut() {
        let texture = slot.current(gl);
        gl.active_texture(0);
        gl.bind_texture(texture);
        if let Some(loc) = program.uniform(shader::UNIFORM_SAMPLER) {
            gl.uniform1i(loc, 0);
        }
    }

    match &scene.draw {
        DrawCall::Arrays { mode, count } => gl.draw_arrays(*mode, 0, *count),
        DrawCall::Elements { mode, indices } => {
            gl.draw_elements(*mode, indices.count() as i32, scene.index_type(), 0)
        }
    }

    if scene.params.animated {
        state.advance(delta_seconds);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Matrix4;

    use super::*;
    use crate::{
        gl::{BufferTarget, DataType, Primitive},
        scene::DemoKind,
        testing::{Call, FakeGl, FakeImage},
        texture::{image_channel, PLACEHOLDER_PIXEL},
    };

    fn draws(calls: &[Call]) -> usize {
        calls
            .iter()
            .filter(|c| matches!(c, Call::DrawArrays(..) | Call::DrawElements(..)))
            .count()
    }

    fn matrix(calls: &[Call], name: &str) -> Matrix4<f32> {
        calls
            .iter()
            .find_map(|c| match c {
                Call::UniformMatrix4fv(n, m) if n == name => Some(Matrix4::from_column_slice(m)),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_triangle_frame() {
        let gl = FakeGl::default();
        let mut scene = Scene::new(&gl, DemoKind::BasicTriangle).unwrap();
        let mut state = RenderState::new(scene.params.initial_rotation);
        gl.clear_calls();

        render_frame(&gl, &mut scene, &mut state, &Camera::default(), 0.5);
        let calls = gl.calls();

        assert_eq!(
            &calls[..4],
            &[
                Call::ClearColor([0.0, 0.0, 0.0, 1.0]),
                Call::ClearDepth(1.0),
                Call::EnableDepthTest,
                Call::Clear,
            ]
        );
        assert_eq!(draws(&calls), 1);
        assert_eq!(calls.last(), Some(&Call::DrawArrays(Primitive::TriangleStrip, 0, 3)));
        // 静止デモは回転しない
        assert_eq!(state.rotation(), 0.0);

        let mv = matrix(&calls, shader::UNIFORM_MODEL_VIEW);
        assert_relative_eq!(mv, Matrix4::new_translation(&nalgebra::Vector3::new(0.0, 0.0, -6.0)));
        let proj = matrix(&calls, shader::UNIFORM_PROJECTION);
        assert_relative_eq!(proj, Camera::default().projection(640.0 / 480.0));
    }

    #[test]
    fn test_attributes_bound_before_draw() {
        let gl = FakeGl::default();
        let mut scene = Scene::new(&gl, DemoKind::BasicTriangleSingleBuffer).unwrap();
        let mut state = RenderState::default();
        gl.clear_calls();
        render_frame(&gl, &mut scene, &mut state, &Camera::default(), 0.0);

        let calls = gl.calls();
        let pointers: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                Call::VertexAttribPointer(loc, l) => Some((*loc, l.stride, l.offset)),
                _ => None,
            })
            .collect();
        assert_eq!(pointers, vec![(0, 28, 0), (1, 28, 12)]);
        assert_eq!(calls[0], Call::ClearColor([0.9, 0.9, 0.9, 1.0]));
    }

    #[test]
    fn test_square_rotation_accumulates() {
        let gl = FakeGl::default();
        let mut scene = Scene::new(&gl, DemoKind::Square).unwrap();
        let mut state = RenderState::new(scene.params.initial_rotation);
        for _ in 0..10 {
            render_frame(&gl, &mut scene, &mut state, &Camera::default(), 0.1);
        }
        assert_relative_eq!(state.rotation(), 3.0, epsilon = 1e-5);
        assert_eq!(draws(&gl.calls()), 10);
    }

    #[test]
    fn test_cube_draws_indexed() {
        let gl = FakeGl::default();
        let mut scene = Scene::new(&gl, DemoKind::ColoredCube).unwrap();
        let mut state = RenderState::default();
        gl.clear_calls();
        render_frame(&gl, &mut scene, &mut state, &Camera::default(), 0.016);

        let calls = gl.calls();
        let draw = calls.last().unwrap();
        assert_eq!(
            draw,
            &Call::DrawElements(Primitive::Triangles, 36, DataType::UnsignedShort, 0)
        );
        assert!(calls
            .iter()
            .any(|c| matches!(c, Call::BindBuffer(BufferTarget::ElementArray, _))));
        assert_relative_eq!(state.rotation(), 0.016);
    }

    #[test]
    fn test_textured_cube_swaps_texture() {
        let gl = FakeGl::default();
        let (tx, rx) = image_channel();
        let mut scene = Scene::textured(&gl, rx).unwrap();
        let mut state = RenderState::default();
        assert!(gl
            .calls()
            .contains(&Call::TexImagePixels(1, 1, PLACEHOLDER_PIXEL.to_vec())));

        gl.clear_calls();
        render_frame(&gl, &mut scene, &mut state, &Camera::default(), 0.016);
        let calls = gl.calls();
        let unit = calls.iter().position(|c| *c == Call::ActiveTexture(0)).unwrap();
        assert!(matches!(calls[unit + 1], Call::BindTexture(_)));
        assert!(calls.contains(&Call::Uniform1i(shader::UNIFORM_SAMPLER.to_owned(), 0)));
        assert!(!calls.iter().any(|c| matches!(c, Call::TexImageSource(..))));

        tx.send(Ok(FakeImage {
            width: 512,
            height: 512,
        }))
        .unwrap();
        gl.clear_calls();
        render_frame(&gl, &mut scene, &mut state, &Camera::default(), 0.016);
        let calls = gl.calls();
        let upload = calls
            .iter()
            .position(|c| *c == Call::TexImageSource(512, 512))
            .unwrap();
        let draw = calls
            .iter()
            .position(|c| matches!(c, Call::DrawElements(..)))
            .unwrap();
        assert!(upload < draw);
        assert_eq!(draws(&calls), 1);
    }
}
