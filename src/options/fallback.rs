use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fallback", inline)]
#[serde(default)]
/// Behavior of the fallback primitive shown when the asset fails to load.
///
/// Spin rates are radians per second, so rotation speed is independent of
/// frame rate. The defaults match the historical per-frame increments
/// (0.005/0.01 rad) at a 60 Hz reference rate.
pub struct FallbackOptions {
    /// Whether the fallback cube spins. Enabled automatically when the
    /// fallback path is taken.
    #[schemars(title = "Rotate Fallback Cube")]
    pub rotate: bool,
    /// Spin rate around the X axis, radians per second.
    #[schemars(skip)]
    pub spin_rate_x: f32,
    /// Spin rate around the Y axis, radians per second.
    #[schemars(skip)]
    pub spin_rate_y: f32,
}

impl Default for FallbackOptions {
    fn default() -> Self {
        Self {
            rotate: false,
            spin_rate_x: 0.3,
            spin_rate_y: 0.6,
        }
    }
}
