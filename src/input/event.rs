use glam::Vec2;

use crate::engine::EngineCommand;

/// Pointer and modifier events reported by the host window.
///
/// Positions are in the same physical-pixel space as the engine viewport,
/// so a click forwarded as [`EngineCommand::SelectAt`] lands on the part
/// drawn under the cursor. Keyboard input bypasses this type and goes
/// through [`InputProcessor::handle_key_press`](super::InputProcessor::handle_key_press).
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(InputEvent::Scroll { delta: 1.0 }) {
///     let _ = engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a viewport position.
    CursorMoved {
        /// Pixels from the left edge.
        x: f32,
        /// Pixels from the top edge.
        y: f32,
    },
    /// A pointer button went down or up.
    MouseButton {
        /// Button that changed.
        button: MouseButton,
        /// `true` on press.
        pressed: bool,
    },
    /// Wheel or trackpad scroll. Positive moves the camera closer.
    Scroll {
        /// Scroll amount in wheel notches.
        delta: f32,
    },
    /// Shift toggled. While held, a left drag pans instead of orbiting.
    ModifiersChanged {
        /// Shift state.
        shift: bool,
    },
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Orbits on drag, selects on click.
    Left,
    /// Pans on drag.
    Right,
    /// Ignored.
    Middle,
}

impl MouseButton {
    /// Camera command for dragging this button by `delta` pixels.
    #[must_use]
    pub fn drag_command(self, shift: bool, delta: Vec2) -> Option<EngineCommand> {
        match self {
            Self::Left if shift => Some(EngineCommand::PanCamera { delta }),
            Self::Left => Some(EngineCommand::RotateCamera { delta }),
            Self::Right => Some(EngineCommand::PanCamera { delta }),
            Self::Middle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_commands_per_button() {
        let d = Vec2::new(3.0, -2.0);
        assert_eq!(
            MouseButton::Left.drag_command(false, d),
            Some(EngineCommand::RotateCamera { delta: d })
        );
        assert_eq!(
            MouseButton::Left.drag_command(true, d),
            Some(EngineCommand::PanCamera { delta: d })
        );
        assert_eq!(
            MouseButton::Right.drag_command(false, d),
            Some(EngineCommand::PanCamera { delta: d })
        );
        assert_eq!(MouseButton::Middle.drag_command(true, d), None);
    }
}
