//! Debug-panel controller: visibility state and the JSON action bridge.
//!
//! The actual widget surface is injected as a [`DebugPanel`]
//! implementation; the controller drains its actions each frame and
//! applies them to the engine through the same option patch mechanism
//! the TOML presets use.

use std::sync::mpsc;

use crate::engine::{ShowcaseCommand, ShowcaseEngine};
use crate::options::Options;

/// Actions emitted by the panel surface toward the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    /// Set a single option field: `options[section][field] = value`.
    SetOption {
        /// Top-level section key (e.g. `"effects"`).
        path: String,
        /// Field key within the section (e.g. `"film_grain"`).
        field: String,
        /// New JSON value.
        value: serde_json::Value,
    },
    /// Animate the camera to a named view.
    RequestView {
        /// View key, e.g. `"view-2"`.
        name: String,
    },
    /// Recolor the configured swatch material.
    ApplySwatch {
        /// Linear RGB color.
        color: [f32; 3],
    },
    /// Flip panel visibility.
    TogglePanel,
}

/// A panel surface the controller can drive.
///
/// Implementations push state outward (schema, visibility, stats) however
/// they like; inbound actions arrive through the channel handed to
/// [`PanelController::new`].
pub trait DebugPanel {
    /// Receive the options schema and current values (call once at
    /// startup and again after option reloads).
    fn push_schema(&mut self, schema: &serde_json::Value);

    /// Show or hide the panel.
    fn set_visible(&mut self, visible: bool);

    /// Receive a periodic stats payload.
    fn push_stats(&mut self, stats: &serde_json::Value) {
        let _ = stats;
    }
}

/// The options schema plus current values, as one JSON payload.
#[must_use]
pub fn schema_json(options: &Options) -> serde_json::Value {
    serde_json::json!({
        "schema": serde_json::to_value(Options::json_schema())
            .unwrap_or(serde_json::Value::Null),
        "values": serde_json::to_value(options)
            .unwrap_or(serde_json::Value::Null),
    })
}

/// A periodic stats payload for the panel.
#[must_use]
pub fn stats_json(engine: &ShowcaseEngine) -> serde_json::Value {
    let progress = engine.load_progress();
    serde_json::json!({
        "fps": engine.fps(),
        "load_outcome": format!("{:?}", engine.load_outcome()),
        "loaded_bytes": progress.map(|(loaded, _)| loaded),
        "total_bytes": progress.map(|(_, total)| total),
    })
}

/// Owns the panel surface and its visibility state, and drains the
/// action channel each frame.
pub struct PanelController {
    surface: Option<Box<dyn DebugPanel>>,
    action_rx: mpsc::Receiver<PanelAction>,
    visible: bool,
}

impl PanelController {
    /// A controller (hidden by default). Returns the sender the panel
    /// surface uses to emit actions.
    #[must_use]
    pub fn new() -> (Self, mpsc::Sender<PanelAction>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                surface: None,
                action_rx: rx,
                visible: false,
            },
            tx,
        )
    }

    /// Attach the panel surface and push the initial schema to it.
    pub fn attach(&mut self, mut surface: Box<dyn DebugPanel>, options: &Options) {
        surface.push_schema(&schema_json(options));
        surface.set_visible(self.visible);
        self.surface = Some(surface);
    }

    /// Whether the panel is currently visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and push the new state to the surface.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if let Some(surface) = &mut self.surface {
            surface.set_visible(self.visible);
        }
    }

    /// Drain pending actions and apply them to the engine.
    pub fn drain_and_apply(&mut self, engine: &mut ShowcaseEngine) {
        let mut toggled = false;
        let mut options_changed = false;

        while let Ok(action) = self.action_rx.try_recv() {
            match action {
                PanelAction::SetOption { path, field, value } => {
                    apply_option_patch(engine, &path, &field, value);
                    options_changed = true;
                }
                PanelAction::RequestView { name } => {
                    engine.execute(ShowcaseCommand::RequestView { name });
                }
                PanelAction::ApplySwatch { color } => {
                    engine.execute(ShowcaseCommand::ApplySwatch { color });
                }
                PanelAction::TogglePanel => toggled = true,
            }
        }

        if toggled {
            self.toggle();
        }
        if options_changed {
            if let Some(surface) = &mut self.surface {
                surface.push_schema(&schema_json(engine.options()));
            }
        }
    }

    /// Push a stats payload to the surface if one is attached.
    pub fn push_stats(&mut self, engine: &ShowcaseEngine) {
        if let Some(surface) = &mut self.surface {
            surface.push_stats(&stats_json(engine));
        }
    }
}

/// Patch one option field through a JSON round trip, so the panel never
/// needs to know the concrete option types. Unknown sections or
/// ill-typed values leave the options unchanged.
fn apply_option_patch(
    engine: &mut ShowcaseEngine,
    path: &str,
    field: &str,
    value: serde_json::Value,
) {
    let Ok(mut root) = serde_json::to_value(engine.options()) else {
        return;
    };
    match root.get_mut(path).and_then(serde_json::Value::as_object_mut) {
        Some(section) => {
            let _ = section.insert(field.to_owned(), value);
        }
        None => {
            log::debug!("no patchable option section {path:?}");
            return;
        }
    }
    match serde_json::from_value::<Options>(root) {
        Ok(updated) => engine.set_options(updated),
        Err(e) => log::debug!("rejecting option patch {path}.{field}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::asset::{AssetLoadError, StaticLoader};
    use crate::render::HeadlessRenderer;

    #[derive(Default)]
    struct RecordingPanel {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl DebugPanel for RecordingPanel {
        fn push_schema(&mut self, _schema: &serde_json::Value) {
            self.log.borrow_mut().push("schema".into());
        }
        fn set_visible(&mut self, visible: bool) {
            self.log.borrow_mut().push(format!("visible={visible}"));
        }
        fn push_stats(&mut self, _stats: &serde_json::Value) {
            self.log.borrow_mut().push("stats".into());
        }
    }

    fn engine() -> ShowcaseEngine {
        ShowcaseEngine::new(
            Box::new(HeadlessRenderer::new()),
            Box::new(StaticLoader::new(Err(AssetLoadError("none".into())))),
            Options::default(),
            (1280, 800),
        )
    }

    #[test]
    fn set_option_patches_one_field() {
        let mut engine = engine();
        let (mut panel, tx) = PanelController::new();

        tx.send(PanelAction::SetOption {
            path: "effects".into(),
            field: "film_grain".into(),
            value: serde_json::Value::Bool(true),
        })
        .unwrap();
        panel.drain_and_apply(&mut engine);

        assert!(engine.options().effects.film_grain);
        // Untouched fields keep their values
        assert_eq!(engine.options().camera.transition_secs, 1.5);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let mut engine = engine();
        let before = engine.options().clone();
        let (mut panel, tx) = PanelController::new();

        tx.send(PanelAction::SetOption {
            path: "bogus".into(),
            field: "x".into(),
            value: serde_json::Value::Bool(true),
        })
        .unwrap();
        tx.send(PanelAction::SetOption {
            path: "camera".into(),
            field: "transition_secs".into(),
            value: serde_json::Value::String("fast".into()),
        })
        .unwrap();
        panel.drain_and_apply(&mut engine);

        assert_eq!(*engine.options(), before);
    }

    #[test]
    fn non_object_sections_are_rejected_without_panicking() {
        let mut engine = engine();
        let before = engine.options().clone();
        let (mut panel, tx) = PanelController::new();

        // `asset_path` is a top-level string and `views` a top-level
        // array; neither is a patchable section.
        tx.send(PanelAction::SetOption {
            path: "asset_path".into(),
            field: "x".into(),
            value: serde_json::Value::Bool(true),
        })
        .unwrap();
        tx.send(PanelAction::SetOption {
            path: "views".into(),
            field: "0".into(),
            value: serde_json::Value::Null,
        })
        .unwrap();
        panel.drain_and_apply(&mut engine);

        assert_eq!(*engine.options(), before);
    }

    #[test]
    fn view_request_flows_through_to_the_engine() {
        let mut engine = engine();
        let (mut panel, tx) = PanelController::new();

        tx.send(PanelAction::RequestView {
            name: "view-3".into(),
        })
        .unwrap();
        panel.drain_and_apply(&mut engine);
        assert!(engine.transition_in_flight());
    }

    #[test]
    fn toggle_drives_surface_visibility() {
        let mut engine = engine();
        let (mut panel, tx) = PanelController::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        panel.attach(
            Box::new(RecordingPanel { log: log.clone() }),
            engine.options(),
        );
        assert!(!panel.visible());

        tx.send(PanelAction::TogglePanel).unwrap();
        panel.drain_and_apply(&mut engine);
        assert!(panel.visible());
        assert!(log.borrow().contains(&"visible=true".to_owned()));
    }

    #[test]
    fn schema_payload_carries_schema_and_values() {
        let payload = schema_json(&Options::default());
        assert!(payload["schema"]["properties"]["effects"].is_object());
        assert_eq!(payload["values"]["camera"]["narrow_fov"], 50.0);
    }
}
