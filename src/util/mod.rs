//! Shared utilities for the showcase core.
//!
//! Helpers for easing curves and frame timing.

pub mod easing;
/// Smoothed frames-per-second tracking.
pub mod frame_timing;
