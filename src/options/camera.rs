use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, control, and transition parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees for wide viewports.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub narrow_fov: f32,
    /// Vertical field of view in degrees at or below the breakpoint width.
    #[schemars(title = "Mobile Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub wide_fov: f32,
    /// Viewport width (physical pixels) at or below which the wide
    /// field-of-view applies.
    #[schemars(skip)]
    pub breakpoint_width: u32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Minimum orbit distance from the focus point.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Maximum orbit distance from the focus point.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Duration of a view transition in seconds.
    #[schemars(title = "Transition Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub transition_secs: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            narrow_fov: 50.0,
            wide_fov: 80.0,
            breakpoint_width: 1024,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.01,
            pan_speed: 0.01,
            zoom_speed: 0.05,
            min_distance: 2.0,
            max_distance: 20.0,
            transition_secs: 1.5,
        }
    }
}

impl CameraOptions {
    /// Field of view for a viewport width under the breakpoint policy.
    /// Always one of the two configured constants, never an intermediate
    /// value.
    #[must_use]
    pub fn fov_for_width(&self, width: u32) -> f32 {
        if width <= self.breakpoint_width {
            self.wide_fov
        } else {
            self.narrow_fov
        }
    }
}
