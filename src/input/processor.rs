//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::AssemblyEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::EngineCommand;

/// Cursor travel (pixels) after which a press counts as a drag rather than
/// a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// Maps physical key strings to [`EngineCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyD"`, `"Space"`, `"Escape"`, etc.
///
/// Only parameterless commands make sense as key bindings; camera drags
/// and selections are produced by the mouse gesture interpreter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`EngineCommand`] that can be
/// key-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Open the assembly.
    Disassemble,
    /// Close the assembly.
    Assemble,
    /// Camera back to the home pose.
    ResetView,
    /// Clear the current selection.
    ClearSelection,
}

impl KeyCommandTag {
    fn to_command(self) -> EngineCommand {
        match self {
            Self::Disassemble => EngineCommand::Disassemble,
            Self::Assemble => EngineCommand::Assemble,
            Self::ResetView => EngineCommand::ResetView,
            Self::ClearSelection => EngineCommand::ClearSelection,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyD".into(), KeyCommandTag::Disassemble),
            ("KeyA".into(), KeyCommandTag::Assemble),
            ("KeyR".into(), KeyCommandTag::ResetView),
            ("Escape".into(), KeyCommandTag::ClearSelection),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<EngineCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

/// Converts raw window events into [`EngineCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     let _ = engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyD") {
///     let _ = engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    mouse_pos: Vec2,
    /// Button held and where it went down.
    press: Option<(MouseButton, Vec2)>,
    dragging: bool,
    shift_pressed: bool,
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            press: None,
            dragging: false,
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Whether the current press has turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<EngineCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<EngineCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(Vec2::new(x, y)),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(EngineCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    fn handle_cursor_moved(&mut self, pos: Vec2) -> Option<EngineCommand> {
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;

        let (button, origin) = self.press?;
        if pos.distance(origin) > DRAG_THRESHOLD {
            self.dragging = true;
        }
        button.drag_command(self.shift_pressed, delta)
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<EngineCommand> {
        if pressed {
            if self.press.is_none() {
                self.press = Some((button, self.mouse_pos));
                self.dragging = false;
            }
            return None;
        }

        let (held, _) = self.press?;
        if held != button {
            return None;
        }
        self.press = None;
        let was_dragging = std::mem::take(&mut self.dragging);

        // A left click that never turned into a drag is a selection.
        (button == MouseButton::Left && !was_dragging).then(|| EngineCommand::SelectAt {
            x: self.mouse_pos.x.round() as i32,
            y: self.mouse_pos.y.round() as i32,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
