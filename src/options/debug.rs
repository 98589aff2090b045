use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Render the fallback cube as wireframe.
    #[schemars(title = "Wireframe Fallback")]
    pub wireframe_fallback: bool,
    /// Log smoothed frame statistics once per second.
    #[schemars(title = "Log Frame Stats")]
    pub log_frame_stats: bool,
}
