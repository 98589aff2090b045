//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera, effect toggles, fallback behavior,
//! colors, keybindings, view presets) are consolidated here. Options
//! serialize to/from TOML for presets and derive a JSON Schema for the
//! schema-driven debug panel.

mod camera;
mod colors;
mod debug;
mod effects;
mod fallback;
mod keybindings;
mod views;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use debug::DebugOptions;
pub use effects::EffectOptions;
pub use fallback::FallbackOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use views::{default_views, ViewPreset};

use crate::error::EyecandyError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[effects]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Path of the model asset handed to the loader.
    #[schemars(skip)]
    pub asset_path: String,
    /// Camera projection, control, and transition parameters.
    pub camera: CameraOptions,
    /// Post-processing effect toggles.
    pub effects: EffectOptions,
    /// Fallback-primitive behavior.
    pub fallback: FallbackOptions,
    /// Color swatches and material substitutions.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Debug toggles.
    pub debug: DebugOptions,
    /// Named camera viewpoints, in button order.
    #[schemars(skip)]
    pub views: Vec<ViewPreset>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            asset_path: "assets/tensor.glb".to_owned(),
            camera: CameraOptions::default(),
            effects: EffectOptions::default(),
            fallback: FallbackOptions::default(),
            colors: ColorOptions::default(),
            keybindings: KeybindingOptions::default(),
            debug: DebugOptions::default(),
            views: default_views(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EyecandyError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, EyecandyError> {
        let content = std::fs::read_to_string(path).map_err(EyecandyError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| EyecandyError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`EyecandyError`] when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), EyecandyError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EyecandyError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EyecandyError::Io)?;
        }
        std::fs::write(path, content).map_err(EyecandyError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
