//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, view button, or the debug panel — is represented as a
//! `ShowcaseCommand`. Consumers construct commands and pass them to
//! [`ShowcaseEngine::execute`](super::ShowcaseEngine::execute).

use glam::Vec2;

/// One of the toggleable post-processing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Film pass (noise + scanlines).
    FilmGrain,
    /// Dot-screen (halftone) pass.
    DotScreen,
    /// RGB shift (chromatic aberration) pass.
    RgbShift,
    /// Ambient-occlusion pass.
    AmbientOcclusion,
}

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — keyboard,
/// mouse, panel, or API all look identical:
///
/// ```ignore
/// engine.execute(ShowcaseCommand::RequestView { name: "view-2".into() });
/// engine.execute(ShowcaseCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseCommand {
    /// Animate the camera to a named view preset. Unknown names are a
    /// silent no-op.
    RequestView {
        /// View key, e.g. `"view-1"`.
        name: String,
    },

    /// Orbit the camera by `delta` pixels of mouse movement.
    /// Suppressed while a view transition is in flight.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    /// Suppressed while a view transition is in flight.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    /// Suppressed while a view transition is in flight.
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Recolor the configured swatch material on the loaded model.
    /// A no-op until a model is attached.
    ApplySwatch {
        /// Linear RGB color.
        color: [f32; 3],
    },

    /// Recolor an arbitrary named sub-material on the loaded model.
    SetMaterialColor {
        /// Material name as authored in the asset.
        material: String,
        /// Linear RGB color.
        color: [f32; 3],
    },

    /// Flip one post-processing pass on or off.
    ToggleEffect {
        /// Which pass to flip.
        effect: EffectKind,
    },

    /// Flip the fallback cube's spin.
    ToggleFallbackSpin,
}
