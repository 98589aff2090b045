//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! button and modifier state). It is the only thing that sits between raw
//! window events and the engine's
//! [`execute`](crate::ShowcaseEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::ShowcaseCommand;

/// Converts raw window events into [`ShowcaseCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last observed cursor position in physical pixels.
    cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// A processor with no buttons or modifiers held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: None,
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ShowcaseCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(ShowcaseCommand::Zoom { delta })
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved — compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, pos: Vec2) -> Option<ShowcaseCommand> {
        let delta = self.cursor.map(|last| pos - last);
        self.cursor = Some(pos);

        let delta = delta.filter(|_| self.mouse_pressed)?;
        if delta.length_squared() == 0.0 {
            return None;
        }
        if self.shift_pressed {
            return Some(ShowcaseCommand::PanCamera { delta });
        }
        Some(ShowcaseCommand::RotateCamera { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_produces_rotate() {
        let mut p = InputProcessor::new();
        assert!(p
            .handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 })
            .is_none());
        assert!(p
            .handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            })
            .is_none());

        let cmd = p
            .handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 })
            .unwrap();
        assert_eq!(
            cmd,
            ShowcaseCommand::RotateCamera {
                delta: Vec2::new(10.0, -5.0)
            }
        );
    }

    #[test]
    fn shift_drag_produces_pan() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = p.handle_event(InputEvent::ModifiersChanged { shift: true });
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let cmd = p
            .handle_event(InputEvent::CursorMoved { x: 4.0, y: 4.0 })
            .unwrap();
        assert!(matches!(cmd, ShowcaseCommand::PanCamera { .. }));
    }

    #[test]
    fn movement_without_button_is_ignored() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert!(p
            .handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 })
            .is_none());
    }

    #[test]
    fn scroll_produces_zoom() {
        let mut p = InputProcessor::new();
        let cmd = p.handle_event(InputEvent::Scroll { delta: 1.5 }).unwrap();
        assert_eq!(cmd, ShowcaseCommand::Zoom { delta: 1.5 });
    }

    #[test]
    fn right_button_does_not_start_a_drag() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(p
            .handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 })
            .is_none());
    }
}
