//! Embedded-clip playback.
//!
//! Clip evaluation (skinning, node transforms) belongs to the rendering
//! library; this module only tracks playback time so the renderer can
//! sample the active clip.

mod mixer;

pub use mixer::{AnimationClip, ClipMixer};
