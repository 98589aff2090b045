use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
/// Post-processing pass toggles and their parameters.
///
/// This record is handed to the active [`Renderer`](crate::render::Renderer)
/// every frame; the renderer enables/disables its pre-built passes from
/// the booleans. Parameters mirror the stock pass settings.
pub struct EffectOptions {
    /// Film pass (noise + scanlines).
    #[schemars(title = "Film (Noise/Scanlines)")]
    pub film_grain: bool,
    /// Film pass noise intensity.
    #[schemars(title = "Noise Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub grain_noise_intensity: f32,
    /// Film pass scanline intensity.
    #[schemars(skip)]
    pub grain_scanline_intensity: f32,
    /// Film pass scanline count.
    #[schemars(skip)]
    pub grain_scanline_count: u32,
    /// Dot-screen (halftone) pass.
    #[schemars(title = "Dot Screen (Halftone)")]
    pub dot_screen: bool,
    /// Dot-screen pattern scale.
    #[schemars(title = "Dot Scale", range(min = 1.0, max = 16.0), extend("step" = 0.5))]
    pub dot_screen_scale: f32,
    /// RGB shift (chromatic aberration) pass.
    #[schemars(title = "RGB Shift (Chromatic)")]
    pub rgb_shift: bool,
    /// RGB shift offset amount.
    #[schemars(title = "Shift Amount", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub rgb_shift_amount: f32,
    /// Ambient-occlusion pass.
    #[schemars(title = "Ambient Occlusion")]
    pub ambient_occlusion: bool,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            film_grain: false,
            grain_noise_intensity: 0.5,
            grain_scanline_intensity: 0.1,
            grain_scanline_count: 512,
            dot_screen: false,
            dot_screen_scale: 4.0,
            rgb_shift: false,
            rgb_shift_amount: 0.005,
            ambient_occlusion: false,
        }
    }
}
