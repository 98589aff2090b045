use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A configured camera viewpoint: name, eye position, look-at point.
///
/// Presets are plain data; they are compiled into a
/// [`ViewRegistry`](crate::camera::ViewRegistry) at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ViewPreset {
    /// Unique view key, e.g. `"view-1"`.
    pub name: String,
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Look-at point in world space.
    pub target: [f32; 3],
}

impl Default for ViewPreset {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: [0.0, 0.0, 10.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// The stock three-viewpoint configuration.
#[must_use]
pub fn default_views() -> Vec<ViewPreset> {
    vec![
        ViewPreset {
            name: "view-1".into(),
            position: [7.0, 9.0, 4.0],
            target: [0.0, 3.0, 1.0],
        },
        ViewPreset {
            name: "view-2".into(),
            position: [0.0, 2.0, 8.0],
            target: [0.0, 0.0, 0.0],
        },
        ViewPreset {
            name: "view-3".into(),
            position: [4.0, 1.0, 0.0],
            target: [0.0, 0.0, 0.0],
        },
    ]
}
