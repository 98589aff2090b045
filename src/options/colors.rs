use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Color customization options for the loaded model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Name of the sub-material the color swatches recolor.
    pub swatch_material: String,
    /// RGB swatch palette exposed to the hosting page.
    pub swatches: Vec<[f32; 3]>,
    /// Material substitutions applied once after the model loads,
    /// keyed by sub-material name.
    pub material_overrides: HashMap<String, [f32; 3]>,
    /// RGB color of the fallback cube.
    pub fallback_color: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        let mut material_overrides = HashMap::new();
        let _ = material_overrides.insert("Black".to_owned(), [0.53, 0.53, 0.53]);

        Self {
            swatch_material: "White_Custom".to_owned(),
            swatches: vec![
                [1.0, 1.0, 1.0],
                [0.9, 0.2, 0.2],
                [0.2, 0.6, 0.9],
                [0.95, 0.75, 0.1],
            ],
            material_overrides,
            // #ff6b6b
            fallback_color: [1.0, 0.42, 0.42],
        }
    }
}
