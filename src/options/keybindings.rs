use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyD"`,
/// `"Digit1"`, ...) with an optional `"Shift+"` prefix for chords.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleDebugPanel` → `"Shift+KeyD"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::View1, "Digit1".into()),
            (KeyAction::View2, "Digit2".into()),
            (KeyAction::View3, "Digit3".into()),
            (KeyAction::ToggleFallbackSpin, "KeyR".into()),
            (KeyAction::ToggleDebugPanel, "Shift+KeyD".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key press. When shift is held, the
    /// `"Shift+key"` chord takes precedence over the bare key.
    #[must_use]
    pub fn lookup(&self, key: &str, shift: bool) -> Option<KeyAction> {
        if shift {
            if let Some(action) =
                self.key_to_action.get(&format!("Shift+{key}"))
            {
                return Some(*action);
            }
        }
        self.key_to_action.get(key).copied()
    }
}
