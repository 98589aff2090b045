//! Camera pose, orbit controller, named view presets, and the
//! view-to-view transition state machine.

/// Orbit-style camera controller with an enable gate.
pub mod controller;
/// Perspective camera and pose math.
pub mod core;
pub mod transition;
pub mod views;

pub use controller::CameraController;
pub use core::{Camera, CameraPose};
pub use transition::{TransitionStep, ViewTransition};
pub use views::{CameraView, ViewRegistry};
