//! Tweened transition between camera poses.
//!
//! State machine per transition: `Idle → Animating → Idle`. A new request
//! while `Animating` overrides the in-flight tween — the start point is
//! the camera's *current* mid-transition pose and the duration restarts,
//! so the redirect is smooth rather than a jump. There is no explicit
//! cancellation; "cancel" is implicit via override.

use super::core::CameraPose;
use crate::util::easing::EasingFunction;

/// Internal transition state.
#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Animating {
        from: CameraPose,
        to: CameraPose,
        elapsed: f32,
        duration: f32,
    },
}

/// One step of [`ViewTransition::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// No transition in flight; nothing to apply.
    Idle,
    /// Mid-flight interpolated pose to apply this tick.
    Moving(CameraPose),
    /// Natural completion: apply the exact target pose and restore direct
    /// camera control.
    Finished(CameraPose),
}

/// Drives an interruptible tween from the current camera pose to a named
/// view's pose.
#[derive(Debug)]
pub struct ViewTransition {
    state: State,
    easing: EasingFunction,
}

impl Default for ViewTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransition {
    /// A transition manager in the `Idle` state with the default
    /// ease-in-out curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Override the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Whether a transition is currently animating.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    /// Begin a tween from `from` to `to` over `duration` seconds,
    /// overriding any in-flight tween. Returns whether the tween
    /// started.
    ///
    /// Degenerate inputs never propagate: a non-finite target is refused
    /// (logged, state unchanged, returns false); a non-finite start or
    /// non-positive duration collapses to an immediate snap, reported as
    /// `Finished` by the next [`advance`](Self::advance).
    pub fn begin(
        &mut self,
        from: CameraPose,
        to: CameraPose,
        duration: f32,
    ) -> bool {
        if !to.is_finite() {
            log::warn!("refusing camera transition to non-finite pose");
            return false;
        }
        let snap = !from.is_finite() || !duration.is_finite() || duration <= 0.0;
        self.state = State::Animating {
            from: if from.is_finite() { from } else { to },
            to,
            elapsed: 0.0,
            duration: if snap { 0.0 } else { duration },
        };
        true
    }

    /// Advance the tween by `dt` seconds and report the pose to apply.
    ///
    /// Completion lands exactly on the target pose and returns the state
    /// machine to `Idle`.
    pub fn advance(&mut self, dt: f32) -> TransitionStep {
        let State::Animating {
            from,
            to,
            elapsed,
            duration,
        } = self.state
        else {
            return TransitionStep::Idle;
        };

        let elapsed = elapsed + dt.max(0.0);
        if duration <= 0.0 || elapsed >= duration {
            self.state = State::Idle;
            return TransitionStep::Finished(to);
        }

        self.state = State::Animating {
            from,
            to,
            elapsed,
            duration,
        };
        let t = self.easing.evaluate(elapsed / duration);
        TransitionStep::Moving(from.lerp(&to, t))
    }
}
