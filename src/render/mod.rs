//! Renderer contract.
//!
//! The rendering pipeline is an external collaborator: the engine hands
//! it the scene, the camera, and the effect-toggle record once per tick
//! and otherwise treats it as a black box. [`HeadlessRenderer`] is a
//! recording no-op implementation for tests and embedders without a GPU
//! backend.

use crate::camera::Camera;
use crate::options::EffectOptions;
use crate::scene::Scene;

/// Draws one frame and tracks surface size. Side-effect only; the engine
/// expects no return contract beyond "frame drawn".
pub trait Renderer {
    /// Draw the scene from the camera with the given effect passes
    /// enabled.
    fn render_frame(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        effects: &EffectOptions,
    );

    /// Propagate a new surface size.
    fn resize(&mut self, width: u32, height: u32);
}

/// Recording no-op renderer.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    size: Option<(u32, u32)>,
    last_effects: Option<EffectOptions>,
}

impl HeadlessRenderer {
    /// A fresh headless renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Last size passed to [`Renderer::resize`].
    #[must_use]
    pub fn last_size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Effect toggles from the most recent frame.
    #[must_use]
    pub fn last_effects(&self) -> Option<&EffectOptions> {
        self.last_effects.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn render_frame(
        &mut self,
        _scene: &Scene,
        _camera: &Camera,
        effects: &EffectOptions,
    ) {
        self.frames += 1;
        self.last_effects = Some(effects.clone());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn headless_renderer_records_frames_and_size() {
        let mut renderer = HeadlessRenderer::new();
        let scene = Scene::new();
        let camera = Camera {
            eye: Vec3::new(7.0, 9.0, 4.0),
            target: Vec3::new(0.0, 3.0, 1.0),
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 50.0,
            znear: 0.1,
            zfar: 1000.0,
        };
        let effects = EffectOptions {
            dot_screen: true,
            ..EffectOptions::default()
        };

        renderer.render_frame(&scene, &camera, &effects);
        renderer.render_frame(&scene, &camera, &effects);
        renderer.resize(800, 600);

        assert_eq!(renderer.frames_rendered(), 2);
        assert_eq!(renderer.last_size(), Some((800, 600)));
        assert!(renderer.last_effects().unwrap().dot_screen);
    }
}
