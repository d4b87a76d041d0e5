use crate::{camera::Camera, gl::GlContext, renderer::render_frame, scene::Scene, state::RenderState};

/// requestAnimationFrameのタイムスタンプ(ミリ秒)から経過秒数を求める
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// 前回からの経過秒数。初回は0
    ///
    /// タイムスタンプが巻き戻った場合も0とする
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last {
            Some(last) if now_ms > last => (now_ms - last) / 1000.0,
            _ => 0.0,
        };
        self.last = Some(now_ms);
        delta
    }
}

/// シーンとフレーム間の状態をまとめたもの
pub struct Animation<G: GlContext> {
    scene: Scene<G>,
    state: RenderState,
    camera: Camera,
    clock: FrameClock,
}

impl<G: GlContext> Animation<G> {
    pub fn new(scene: Scene<G>) -> Self {
        let state = RenderState::new(scene.params.initial_rotation);
        Self {
            scene,
            state,
            camera: Camera::default(),
            clock: FrameClock::default(),
        }
    }

    /// フレーム毎に描画し続けるかどうか
    pub fn is_animated(&self) -> bool {
        self.scene.params.animated
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// 静止デモ用。経過時間0で1度だけ描画する
    pub fn render_once(&mut self, gl: &G) {
        render_frame(gl, &mut self.scene, &mut self.state, &self.camera, 0.0);
    }

    /// アニメーションフレームのタイムスタンプを受けて1フレーム描画する
    pub fn frame(&mut self, gl: &G, now_ms: f64) {
        let dt = self.clock.delta(now_ms);
        render_frame(gl, &mut self.scene, &mut self.state, &self.camera, dt);
    }
}
