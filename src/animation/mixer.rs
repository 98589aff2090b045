/// One embedded animation clip: a name and a duration in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Clip name as authored in the asset.
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
}

impl AnimationClip {
    /// A clip with the given name and duration.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Plays the first embedded clip, looping, advanced by elapsed seconds.
#[derive(Debug)]
pub struct ClipMixer {
    clip: AnimationClip,
    time: f32,
}

impl ClipMixer {
    /// A mixer over the first clip, or `None` when the asset carries no
    /// clips (playback is simply skipped).
    #[must_use]
    pub fn from_clips(clips: &[AnimationClip]) -> Option<Self> {
        let clip = clips.first()?.clone();
        if clip.duration <= 0.0 || !clip.duration.is_finite() {
            log::warn!(
                "clip {:?} has degenerate duration {}; skipping playback",
                clip.name,
                clip.duration
            );
            return None;
        }
        log::info!("playing animation clip {:?}", clip.name);
        Some(Self { clip, time: 0.0 })
    }

    /// Advance playback by `dt` seconds, wrapping at the clip end.
    pub fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.time = (self.time + dt) % self.clip.duration;
    }

    /// Current playback position in seconds.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// The playing clip.
    #[must_use]
    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_first_clip_and_wraps() {
        let clips = vec![
            AnimationClip::new("idle", 2.0),
            AnimationClip::new("walk", 1.0),
        ];
        let mut mixer = ClipMixer::from_clips(&clips).unwrap();
        assert_eq!(mixer.clip().name, "idle");

        mixer.advance(0.5);
        assert!((mixer.time() - 0.5).abs() < 1e-6);
        mixer.advance(1.75);
        // 2.25 wraps to 0.25
        assert!((mixer.time() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn no_clips_means_no_mixer() {
        assert!(ClipMixer::from_clips(&[]).is_none());
    }

    #[test]
    fn degenerate_duration_is_skipped() {
        let clips = vec![AnimationClip::new("broken", 0.0)];
        assert!(ClipMixer::from_clips(&clips).is_none());
    }

    #[test]
    fn negative_dt_is_ignored() {
        let clips = vec![AnimationClip::new("idle", 2.0)];
        let mut mixer = ClipMixer::from_clips(&clips).unwrap();
        mixer.advance(0.5);
        mixer.advance(-1.0);
        assert!((mixer.time() - 0.5).abs() < 1e-6);
    }
}
