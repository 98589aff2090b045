//! The scene lifecycle controller.
//!
//! [`ShowcaseEngine`] sequences startup, absorbs the asset-load outcome
//! (real model or fallback primitive), drives the per-frame tick, and
//! owns the camera-view transition manager. It is strictly
//! single-threaded: the loader is observed only through non-blocking
//! polls on the tick thread, and the tick itself is O(1) relative to
//! model complexity.

mod command;

pub use command::{EffectKind, ShowcaseCommand};

use crate::asset::{AssetLoader, LoadResult};
use crate::animation::ClipMixer;
use crate::camera::{
    Camera, CameraController, CameraPose, TransitionStep, ViewRegistry,
    ViewTransition,
};
use crate::input::KeyAction;
use crate::options::Options;
use crate::render::Renderer;
use crate::scene::{LoadOutcome, Scene};
use crate::util::frame_timing::FrameTiming;

/// Frames between frame-stat log lines when enabled.
const STATS_LOG_INTERVAL: u64 = 120;

/// Orchestrates the showcase scene: startup, load outcome, per-frame
/// tick, camera-view transitions, and the command vocabulary.
///
/// # Construction
///
/// [`ShowcaseEngine::new`] builds the camera at the first configured
/// view, issues the asset-load request, and leaves the load outcome
/// `Pending`. The host then drives [`tick`](Self::tick) once per display
/// refresh.
///
/// # Load outcome
///
/// The loader's resolution arrives either through per-tick polling or an
/// explicit [`resolve_asset_load`](Self::resolve_asset_load) call. Both
/// funnel through the same one-shot guard: the outcome transitions
/// `Pending` to exactly one of `Loaded`/`FallbackUsed`, and any later
/// resolution is logged and ignored. Load failure is a designed fallback
/// path, not an error — no retry, the fallback persists for the session.
pub struct ShowcaseEngine {
    renderer: Box<dyn Renderer>,
    loader: Box<dyn AssetLoader>,
    scene: Scene,
    views: ViewRegistry,
    camera_controller: CameraController,
    transition: ViewTransition,
    mixer: Option<ClipMixer>,
    options: Options,
    frame_timing: FrameTiming,
    frames: u64,
}

impl ShowcaseEngine {
    /// Initialize the scene: camera at the first configured view (with
    /// the breakpoint field-of-view for the initial width), asset load
    /// requested, outcome `Pending`, rendering ready to begin with an
    /// empty scene.
    #[must_use]
    pub fn new(
        renderer: Box<dyn Renderer>,
        mut loader: Box<dyn AssetLoader>,
        options: Options,
        viewport: (u32, u32),
    ) -> Self {
        let views = ViewRegistry::from_presets(&options.views);
        let initial = views.first().map_or_else(
            || {
                log::warn!("no camera views configured; using default pose");
                CameraPose::new(
                    glam::Vec3::new(0.0, 0.0, 10.0),
                    glam::Vec3::ZERO,
                )
            },
            |view| view.pose(),
        );
        let camera_controller =
            CameraController::new(&options.camera, initial, viewport);

        loader.request(&options.asset_path);

        Self {
            renderer,
            loader,
            scene: Scene::new(),
            views,
            camera_controller,
            transition: ViewTransition::new(),
            mixer: None,
            options,
            frame_timing: FrameTiming::new(),
            frames: 0,
        }
    }

    /// One frame: advance all state by `dt` seconds, then render.
    pub fn tick(&mut self, dt: f32) {
        self.update(dt);
        self.render();
    }

    /// Advance load polling, the view transition, and model animation by
    /// `dt` seconds without rendering.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.poll_asset_load();
        self.advance_transition(dt);
        self.advance_model(dt);
    }

    /// Draw one frame through the active renderer.
    pub fn render(&mut self) {
        self.renderer.render_frame(
            &self.scene,
            &self.camera_controller.camera,
            &self.options.effects,
        );
        self.frame_timing.end_frame();
        self.frames += 1;
        if self.options.debug.log_frame_stats
            && self.frames % STATS_LOG_INTERVAL == 0
        {
            log::debug!("fps: {:.1}", self.frame_timing.fps());
        }
    }

    /// Recompute camera aspect ratio, reapply the breakpoint
    /// field-of-view policy, and propagate the new size to the renderer.
    /// Independent of any in-flight view transition.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera_controller
            .resize(width, height, &self.options.camera);
        self.renderer.resize(width, height);
    }

    /// Resolve the asset load. One-shot: a second resolution (of either
    /// kind) is logged and ignored — a model is never double-attached.
    pub fn resolve_asset_load(&mut self, result: LoadResult) {
        if self.scene.outcome() != LoadOutcome::Pending {
            log::warn!("ignoring duplicate asset-load resolution");
            return;
        }
        match result {
            Ok(asset) => {
                let mut model = asset.model;
                for (name, color) in &self.options.colors.material_overrides {
                    if model.set_material_color(name, *color) == 0 {
                        log::debug!("no material named {name:?} to override");
                    }
                }
                self.mixer = ClipMixer::from_clips(&asset.clips);
                if asset.clips.is_empty() {
                    log::warn!("model loaded but contains no animations");
                }
                let _attached = self.scene.attach_loaded(model);
                log::info!("model loaded successfully");
            }
            Err(e) => {
                log::warn!("{e}; using fallback cube");
                let _attached = self
                    .scene
                    .attach_fallback(self.options.colors.fallback_color);
                // Expose the spin control for the cube
                self.options.fallback.rotate = true;
            }
        }
    }

    /// Animate the camera to a named view. Unknown names are a silent
    /// no-op. A request while a transition is animating overrides it,
    /// restarting from the current mid-flight pose.
    pub fn request_view(&mut self, name: &str) {
        let Some(view) = self.views.get(name) else {
            log::debug!("ignoring request for unknown camera view {name:?}");
            return;
        };
        let target = view.pose();
        let started = self.transition.begin(
            self.camera_controller.pose(),
            target,
            self.options.camera.transition_secs,
        );
        // Direct manipulation stays off until the transition finishes
        // naturally. A refused tween must not touch the gate.
        if started {
            self.camera_controller.set_enabled(false);
        }
    }

    /// Perform one command.
    pub fn execute(&mut self, command: ShowcaseCommand) {
        match command {
            ShowcaseCommand::RequestView { name } => self.request_view(&name),
            ShowcaseCommand::RotateCamera { delta } => {
                self.camera_controller.rotate(delta);
            }
            ShowcaseCommand::PanCamera { delta } => {
                self.camera_controller.pan(delta);
            }
            ShowcaseCommand::Zoom { delta } => {
                self.camera_controller.zoom(delta);
            }
            ShowcaseCommand::ApplySwatch { color } => {
                let material = self.options.colors.swatch_material.clone();
                self.set_material_color(&material, color);
            }
            ShowcaseCommand::SetMaterialColor { material, color } => {
                self.set_material_color(&material, color);
            }
            ShowcaseCommand::ToggleEffect { effect } => {
                self.toggle_effect(effect);
            }
            ShowcaseCommand::ToggleFallbackSpin => {
                self.options.fallback.rotate = !self.options.fallback.rotate;
            }
        }
    }

    /// Perform a key-bound action. Returns false for actions the engine
    /// does not own (debug-panel visibility belongs to the host shell).
    pub fn handle_key_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::View1 | KeyAction::View2 | KeyAction::View3 => {
                if let Some(name) = action
                    .view_index()
                    .and_then(|idx| self.views.names().get(idx).cloned())
                {
                    self.request_view(&name);
                }
                true
            }
            KeyAction::ToggleFallbackSpin => {
                self.execute(ShowcaseCommand::ToggleFallbackSpin);
                true
            }
            KeyAction::ToggleDebugPanel => false,
        }
    }

    fn poll_asset_load(&mut self) {
        if self.scene.outcome() != LoadOutcome::Pending {
            return;
        }
        if let Some(result) = self.loader.poll() {
            self.resolve_asset_load(result);
        }
    }

    fn advance_transition(&mut self, dt: f32) {
        match self.transition.advance(dt) {
            TransitionStep::Idle => {}
            TransitionStep::Moving(pose) => {
                self.camera_controller.apply_pose(pose);
            }
            TransitionStep::Finished(pose) => {
                self.camera_controller.apply_pose(pose);
                self.camera_controller.set_enabled(true);
            }
        }
    }

    fn advance_model(&mut self, dt: f32) {
        if let Some(mixer) = &mut self.mixer {
            mixer.advance(dt);
        } else if self.scene.is_fallback() && self.options.fallback.rotate {
            let (rate_x, rate_y) = (
                self.options.fallback.spin_rate_x,
                self.options.fallback.spin_rate_y,
            );
            if let Some(model) = self.scene.model_mut() {
                model.rotation.x += rate_x * dt;
                model.rotation.y += rate_y * dt;
            }
        }
    }

    fn set_material_color(&mut self, material: &str, color: [f32; 3]) {
        let Some(model) = self.scene.model_mut() else {
            log::debug!("no model attached; ignoring color change");
            return;
        };
        if model.set_material_color(material, color) == 0 {
            log::debug!("no material named {material:?}");
        }
    }

    fn toggle_effect(&mut self, effect: EffectKind) {
        let effects = &mut self.options.effects;
        match effect {
            EffectKind::FilmGrain => {
                effects.film_grain = !effects.film_grain;
            }
            EffectKind::DotScreen => {
                effects.dot_screen = !effects.dot_screen;
            }
            EffectKind::RgbShift => {
                effects.rgb_shift = !effects.rgb_shift;
            }
            EffectKind::AmbientOcclusion => {
                effects.ambient_occlusion = !effects.ambient_occlusion;
            }
        }
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl ShowcaseEngine {
    /// Runtime options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the runtime options, rebuilding derived state (view
    /// registry, keybinding reverse map, camera tunables).
    pub fn set_options(&mut self, mut options: Options) {
        options.keybindings.rebuild_reverse_map();
        self.views = ViewRegistry::from_presets(&options.views);
        self.camera_controller.apply_options(&options.camera);
        self.options = options;
    }

    /// The scene (model + load outcome).
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera being driven.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera_controller.camera
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera_controller.pose()
    }

    /// Configured views.
    #[must_use]
    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Current load outcome.
    #[must_use]
    pub fn load_outcome(&self) -> LoadOutcome {
        self.scene.outcome()
    }

    /// Whether a view transition is animating.
    #[must_use]
    pub fn transition_in_flight(&self) -> bool {
        self.transition.in_flight()
    }

    /// Whether direct camera manipulation is currently allowed.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.camera_controller.enabled()
    }

    /// Load progress as `(loaded_bytes, total_bytes)`, if the loader
    /// reports it.
    #[must_use]
    pub fn load_progress(&self) -> Option<(u64, u64)> {
        self.loader.progress()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::animation::AnimationClip;
    use crate::asset::{AssetLoadError, LoadedAsset, StaticLoader};
    use crate::render::HeadlessRenderer;
    use crate::scene::{Material, Model};

    const DT: f32 = 1.0 / 60.0;

    /// Renderer handle shared between the engine and the test body.
    #[derive(Clone, Default)]
    struct SharedRenderer(Rc<RefCell<HeadlessRenderer>>);

    impl Renderer for SharedRenderer {
        fn render_frame(
            &mut self,
            scene: &Scene,
            camera: &Camera,
            effects: &crate::options::EffectOptions,
        ) {
            self.0.borrow_mut().render_frame(scene, camera, effects);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.0.borrow_mut().resize(width, height);
        }
    }

    fn loaded_asset() -> LoadedAsset {
        LoadedAsset {
            model: Model::new(
                "tensor",
                vec![
                    Material {
                        name: "White_Custom".into(),
                        base_color: [1.0, 1.0, 1.0],
                    },
                    Material {
                        name: "Black".into(),
                        base_color: [0.0, 0.0, 0.0],
                    },
                ],
            ),
            clips: vec![AnimationClip::new("idle", 2.0)],
        }
    }

    fn engine_with(
        result: crate::asset::LoadResult,
    ) -> (ShowcaseEngine, SharedRenderer) {
        let renderer = SharedRenderer::default();
        let engine = ShowcaseEngine::new(
            Box::new(renderer.clone()),
            Box::new(StaticLoader::new(result)),
            Options::default(),
            (1280, 800),
        );
        (engine, renderer)
    }

    #[test]
    fn starts_pending_at_first_view() {
        let (engine, _) = engine_with(Ok(loaded_asset()));
        assert_eq!(engine.load_outcome(), LoadOutcome::Pending);
        let pose = engine.pose();
        assert!((pose.eye - Vec3::new(7.0, 9.0, 4.0)).length() < 1e-4);
        assert!((pose.target - Vec3::new(0.0, 3.0, 1.0)).length() < 1e-4);
        // 1280 > breakpoint ⇒ narrow fov
        assert_eq!(engine.camera().fovy, 50.0);
    }

    #[test]
    fn tick_before_resolution_treats_model_as_absent_then_loads() {
        let renderer = SharedRenderer::default();
        // Loader that stays pending for a while.
        struct SlowLoader {
            polls: u32,
            result: Option<crate::asset::LoadResult>,
        }
        impl AssetLoader for SlowLoader {
            fn request(&mut self, _path: &str) {}
            fn poll(&mut self) -> Option<crate::asset::LoadResult> {
                self.polls += 1;
                if self.polls >= 3 {
                    self.result.take()
                } else {
                    None
                }
            }
        }

        let mut engine = ShowcaseEngine::new(
            Box::new(renderer.clone()),
            Box::new(SlowLoader {
                polls: 0,
                result: Some(Ok(loaded_asset())),
            }),
            Options::default(),
            (1280, 800),
        );

        engine.tick(DT);
        assert_eq!(engine.load_outcome(), LoadOutcome::Pending);
        assert!(engine.scene().model().is_none());
        // Frame was still rendered with an empty scene.
        assert_eq!(renderer.0.borrow().frames_rendered(), 1);

        engine.tick(DT);
        engine.tick(DT);
        assert_eq!(engine.load_outcome(), LoadOutcome::Loaded);
        assert!(engine.scene().model().is_some());
    }

    #[test]
    fn load_success_is_one_shot() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.tick(DT);
        assert_eq!(engine.load_outcome(), LoadOutcome::Loaded);
        let name = engine.scene().model().unwrap().name().to_owned();

        // Duplicate resolutions of either kind are ignored.
        engine.resolve_asset_load(Ok(loaded_asset()));
        engine.resolve_asset_load(Err(AssetLoadError("late timeout".into())));
        assert_eq!(engine.load_outcome(), LoadOutcome::Loaded);
        assert_eq!(engine.scene().model().unwrap().name(), name);
        assert!(!engine.scene().is_fallback());
    }

    #[test]
    fn load_success_applies_material_overrides() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.tick(DT);
        let model = engine.scene().model().unwrap();
        let black = model
            .materials()
            .iter()
            .find(|m| m.name == "Black")
            .unwrap();
        assert_eq!(black.base_color, [0.53, 0.53, 0.53]);
    }

    #[test]
    fn load_failure_takes_fallback_path_and_spins_by_dt() {
        let (mut engine, _) =
            engine_with(Err(AssetLoadError("404".into())));
        engine.tick(DT);
        assert_eq!(engine.load_outcome(), LoadOutcome::FallbackUsed);
        assert!(engine.scene().is_fallback());
        // Failure enables the spin toggle
        assert!(engine.options().fallback.rotate);

        let start = engine.scene().model().unwrap().rotation;
        let ticks = 30;
        for _ in 0..ticks {
            engine.tick(DT);
        }
        let rotation = engine.scene().model().unwrap().rotation;
        let elapsed = ticks as f32 * DT;
        let expected_x = start.x + 0.3 * elapsed;
        let expected_y = start.y + 0.6 * elapsed;
        assert!((rotation.x - expected_x).abs() < 1e-4);
        assert!((rotation.y - expected_y).abs() < 1e-4);

        // Monotonically increasing while the toggle stays on
        engine.tick(DT);
        let next = engine.scene().model().unwrap().rotation;
        assert!(next.x > rotation.x && next.y > rotation.y);

        // Toggle off freezes the cube
        engine.execute(ShowcaseCommand::ToggleFallbackSpin);
        engine.tick(DT);
        assert_eq!(engine.scene().model().unwrap().rotation, next);
    }

    #[test]
    fn duplicate_resolution_after_failure_is_ignored() {
        let (mut engine, _) =
            engine_with(Err(AssetLoadError("timeout".into())));
        engine.tick(DT);
        assert_eq!(engine.load_outcome(), LoadOutcome::FallbackUsed);
        engine.resolve_asset_load(Ok(loaded_asset()));
        assert_eq!(engine.load_outcome(), LoadOutcome::FallbackUsed);
        assert!(engine.scene().is_fallback());
    }

    #[test]
    fn request_view_converges_on_target() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.request_view("view-2");
        assert!(engine.transition_in_flight());
        assert!(!engine.controls_enabled());

        // 1.5s at 60Hz plus one tick of slack
        for _ in 0..92 {
            engine.tick(DT);
        }
        assert!(!engine.transition_in_flight());
        assert!(engine.controls_enabled());
        let pose = engine.pose();
        assert!((pose.eye - Vec3::new(0.0, 2.0, 8.0)).length() < 1e-3);
        assert!(pose.target.length() < 1e-3);
    }

    #[test]
    fn view_override_lands_on_second_target_smoothly() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.request_view("view-2");
        for _ in 0..45 {
            engine.tick(DT);
        }
        let mid = engine.pose();

        engine.request_view("view-3");
        // The redirect starts from the mid-flight pose: the first step
        // after the override stays within one eased tick of it.
        engine.tick(DT);
        let after = engine.pose();
        let span = (Vec3::new(4.0, 1.0, 0.0) - mid.eye).length();
        assert!((after.eye - mid.eye).length() <= span * 2.0 * (DT / 1.5) + 1e-4);

        for _ in 0..92 {
            engine.tick(DT);
        }
        let pose = engine.pose();
        assert!((pose.eye - Vec3::new(4.0, 1.0, 0.0)).length() < 1e-3);
        assert!(engine.controls_enabled());
    }

    #[test]
    fn unknown_view_is_a_silent_no_op() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.tick(DT);
        let before = engine.pose();
        engine.request_view("nonexistent");
        assert!(!engine.transition_in_flight());
        assert!(engine.controls_enabled());
        engine.tick(DT);
        assert_eq!(engine.pose(), before);
    }

    #[test]
    fn refused_view_leaves_controls_enabled() {
        // A preset with a non-finite position parses fine from TOML
        // (`inf`/`nan` are valid floats) but must never start a tween or
        // touch the controls gate.
        let mut options = Options::default();
        options.views.push(crate::options::ViewPreset {
            name: "bad".into(),
            position: [f32::NAN, 0.0, 0.0],
            target: [0.0, 0.0, 0.0],
        });
        let mut engine = ShowcaseEngine::new(
            Box::new(HeadlessRenderer::new()),
            Box::new(StaticLoader::new(Ok(loaded_asset()))),
            options,
            (1280, 800),
        );

        engine.request_view("bad");
        assert!(!engine.transition_in_flight());
        assert!(engine.controls_enabled());

        for _ in 0..10 {
            engine.tick(DT);
        }
        assert!(engine.controls_enabled());
        let before = engine.pose();
        engine.execute(ShowcaseCommand::Zoom { delta: 1.0 });
        assert_ne!(engine.pose(), before);
    }

    #[test]
    fn direct_input_is_suppressed_during_transition() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.request_view("view-2");
        engine.tick(DT);
        let before = engine.pose();
        engine.execute(ShowcaseCommand::Zoom { delta: 5.0 });
        assert_eq!(engine.pose(), before);

        for _ in 0..92 {
            engine.tick(DT);
        }
        let before = engine.pose();
        engine.execute(ShowcaseCommand::Zoom { delta: 5.0 });
        assert_ne!(engine.pose(), before);
    }

    #[test]
    fn resize_toggles_between_the_two_fov_constants() {
        let (mut engine, renderer) = engine_with(Ok(loaded_asset()));
        engine.resize(800, 600);
        assert_eq!(engine.camera().fovy, 80.0);
        assert_eq!(renderer.0.borrow().last_size(), Some((800, 600)));

        engine.resize(1920, 1080);
        assert_eq!(engine.camera().fovy, 50.0);

        engine.resize(1024, 768);
        assert_eq!(engine.camera().fovy, 80.0);

        // Degenerate sizes are ignored
        engine.resize(0, 600);
        assert_eq!(renderer.0.borrow().last_size(), Some((1024, 768)));
    }

    #[test]
    fn resize_does_not_interrupt_a_transition() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        engine.request_view("view-2");
        for _ in 0..30 {
            engine.tick(DT);
        }
        engine.resize(800, 600);
        assert!(engine.transition_in_flight());
        assert_eq!(engine.camera().fovy, 80.0);

        for _ in 0..92 {
            engine.tick(DT);
        }
        assert!((engine.pose().eye - Vec3::new(0.0, 2.0, 8.0)).length() < 1e-3);
    }

    #[test]
    fn swatch_applies_to_configured_material() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        // Before the model resolves, swatches are a graceful no-op.
        engine.execute(ShowcaseCommand::ApplySwatch {
            color: [0.9, 0.2, 0.2],
        });
        engine.tick(DT);
        engine.execute(ShowcaseCommand::ApplySwatch {
            color: [0.9, 0.2, 0.2],
        });
        let model = engine.scene().model().unwrap();
        let white = model
            .materials()
            .iter()
            .find(|m| m.name == "White_Custom")
            .unwrap();
        assert_eq!(white.base_color, [0.9, 0.2, 0.2]);
    }

    #[test]
    fn effect_toggles_round_trip() {
        let (mut engine, renderer) = engine_with(Ok(loaded_asset()));
        engine.execute(ShowcaseCommand::ToggleEffect {
            effect: EffectKind::FilmGrain,
        });
        engine.execute(ShowcaseCommand::ToggleEffect {
            effect: EffectKind::AmbientOcclusion,
        });
        engine.tick(DT);
        {
            let r = renderer.0.borrow();
            let effects = r.last_effects().unwrap();
            assert!(effects.film_grain);
            assert!(effects.ambient_occlusion);
            assert!(!effects.dot_screen);
        }
        engine.execute(ShowcaseCommand::ToggleEffect {
            effect: EffectKind::FilmGrain,
        });
        engine.tick(DT);
        assert!(!renderer.0.borrow().last_effects().unwrap().film_grain);
    }

    #[test]
    fn key_actions_map_to_views_in_button_order() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        assert!(engine.handle_key_action(KeyAction::View2));
        assert!(engine.transition_in_flight());
        for _ in 0..92 {
            engine.tick(DT);
        }
        assert!((engine.pose().eye - Vec3::new(0.0, 2.0, 8.0)).length() < 1e-3);

        // The panel chord is owned by the host shell.
        assert!(!engine.handle_key_action(KeyAction::ToggleDebugPanel));
    }

    #[test]
    fn mixer_advances_on_loaded_model() {
        let (mut engine, _) = engine_with(Ok(loaded_asset()));
        // The resolution tick already advances the mixer, so 31 ticks
        // accumulate 31 steps.
        engine.tick(DT);
        for _ in 0..30 {
            engine.tick(DT);
        }
        let mixer = engine.mixer.as_ref().unwrap();
        assert!((mixer.time() - 31.0 * DT).abs() < 1e-3);
    }

    #[test]
    fn empty_views_degrade_to_default_pose() {
        let options = Options {
            views: Vec::new(),
            ..Options::default()
        };
        let mut engine = ShowcaseEngine::new(
            Box::new(HeadlessRenderer::new()),
            Box::new(StaticLoader::new(Ok(loaded_asset()))),
            options,
            (1280, 800),
        );
        // No views: requests are no-ops, ticking still works.
        engine.request_view("view-1");
        assert!(!engine.transition_in_flight());
        engine.tick(DT);
        assert!(engine.pose().is_finite());
    }
}
