use std::time::Instant;

/// Smoothed frames-per-second tracking.
///
/// The host's event loop paces rendering; this clock only observes frame
/// boundaries and keeps an exponential moving average for stats output.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_starts_at_reasonable_default() {
        let timing = FrameTiming::new();
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn fps_stays_finite_and_positive() {
        let mut timing = FrameTiming::new();
        for _ in 0..5 {
            timing.end_frame();
        }
        assert!(timing.fps().is_finite());
        assert!(timing.fps() > 0.0);
    }
}
