//! Standalone showcase window backed by winit.
//!
//! The viewer owns the event loop and per-frame timing; rendering and
//! asset decoding are injected so the same shell runs against a real GPU
//! backend or the headless recorder.
//!
//! ```no_run
//! # use eyecandy::Viewer;
//! Viewer::builder()
//!     .with_title("Showcase")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    asset::{AssetLoadError, AssetLoader, StaticLoader},
    error::EyecandyError,
    gui::{DebugPanel, PanelAction, PanelController},
    input::InputProcessor,
    options::Options,
    render::{HeadlessRenderer, Renderer},
    InputEvent, MouseButton, ShowcaseEngine,
};

/// Builds a [`DebugPanel`] surface once the action sender exists.
type PanelFactory =
    Box<dyn FnOnce(std::sync::mpsc::Sender<PanelAction>) -> Box<dyn DebugPanel>>;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    renderer: Option<Box<dyn Renderer>>,
    loader: Option<Box<dyn AssetLoader>>,
    options: Option<Options>,
    panel: Option<PanelFactory>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            renderer: None,
            loader: None,
            options: None,
            panel: None,
            title: "Eyecandy".into(),
        }
    }

    /// Inject the renderer backend. Defaults to the headless recorder.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Inject the asset loader. Without one the scene falls back to the
    /// spinning cube immediately.
    #[must_use]
    pub fn with_loader(mut self, loader: Box<dyn AssetLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Attach a debug-panel surface. The factory receives the sender the
    /// surface uses to emit [`PanelAction`]s.
    #[must_use]
    pub fn with_panel(
        mut self,
        factory: impl FnOnce(std::sync::mpsc::Sender<PanelAction>) -> Box<dyn DebugPanel>
            + 'static,
    ) -> Self {
        self.panel = Some(Box::new(factory));
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            renderer: self.renderer,
            loader: self.loader,
            options: self.options,
            panel: self.panel,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the showcase scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    renderer: Option<Box<dyn Renderer>>,
    loader: Option<Box<dyn AssetLoader>>,
    options: Option<Options>,
    panel: Option<PanelFactory>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`EyecandyError::Viewer`] when the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), EyecandyError> {
        let event_loop = EventLoop::new()
            .map_err(|e| EyecandyError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            input: InputProcessor::new(),
            panel: None,
            panel_factory: self.panel,
            last_frame_time: Instant::now(),
            last_stats_push: Instant::now(),
            renderer: self.renderer,
            loader: self.loader,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| EyecandyError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<ShowcaseEngine>,
    input: InputProcessor,
    panel: Option<PanelController>,
    panel_factory: Option<PanelFactory>,
    last_frame_time: Instant,
    last_stats_push: Instant,
    renderer: Option<Box<dyn Renderer>>,
    loader: Option<Box<dyn AssetLoader>>,
    options: Option<Options>,
    title: String,
}

/// Interval between stats pushes to the panel.
const STATS_PUSH_INTERVAL: Duration = Duration::from_millis(250);

/// Clamp window dimensions so the camera aspect stays valid.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewport = viewport_size(window.inner_size());
        let renderer = self
            .renderer
            .take()
            .unwrap_or_else(|| Box::new(HeadlessRenderer::new()));
        let loader = self.loader.take().unwrap_or_else(|| {
            Box::new(StaticLoader::new(Err(AssetLoadError(
                "no asset loader configured".into(),
            ))))
        });
        let options = self.options.take().unwrap_or_default();

        let engine = ShowcaseEngine::new(renderer, loader, options, viewport);

        let (mut panel, action_tx) = PanelController::new();
        if let Some(factory) = self.panel_factory.take() {
            panel.attach(factory(action_tx), engine.options());
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
        self.panel = Some(panel);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(panel), Some(engine)) =
                    (&mut self.panel, &mut self.engine)
                {
                    panel.drain_and_apply(engine);
                }

                let now = Instant::now();
                let dt = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                if let Some(engine) = &mut self.engine {
                    engine.tick(dt);

                    if let Some(panel) = &mut self.panel {
                        if now.duration_since(self.last_stats_push)
                            >= STATS_PUSH_INTERVAL
                        {
                            panel.push_stats(engine);
                            self.last_stats_push = now;
                        }
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                self.forward_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.forward_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward_input(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                let shift = self.input.shift_pressed();
                if let Some(engine) = &mut self.engine {
                    if let Some(action) =
                        engine.options().keybindings.lookup(&key_str, shift)
                    {
                        if !engine.handle_key_action(action) {
                            // Panel visibility belongs to the shell.
                            if let Some(panel) = &mut self.panel {
                                panel.toggle();
                            }
                        }
                    }
                }
            }

            _ => (),
        }
    }
}

impl ViewerApp {
    /// Route a raw event through the input processor and execute any
    /// resulting command.
    fn forward_input(&mut self, event: InputEvent) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        if let Some(command) = self.input.handle_event(event) {
            engine.execute(command);
        }
    }
}
