use serde::{Deserialize, Serialize};

/// Discrete, parameterless actions that can be bound to keys.
///
/// Parameterized commands (camera drags, swatch colors) are produced by
/// the mouse gesture interpreter or the debug panel, not key lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Jump to the first configured camera view.
    View1,
    /// Jump to the second configured camera view.
    View2,
    /// Jump to the third configured camera view.
    View3,
    /// Toggle the fallback cube's spin.
    ToggleFallbackSpin,
    /// Toggle debug-panel visibility.
    ToggleDebugPanel,
}

impl KeyAction {
    /// The configured-view index this action targets, if it is a view
    /// jump.
    #[must_use]
    pub fn view_index(self) -> Option<usize> {
        match self {
            Self::View1 => Some(0),
            Self::View2 => Some(1),
            Self::View3 => Some(2),
            _ => None,
        }
    }
}
