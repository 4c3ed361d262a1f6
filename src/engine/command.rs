//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! gesture, UI button, or programmatic call, is represented as an
//! `EngineCommand`. Consumers construct commands and pass them to
//! [`AssemblyEngine::execute`](super::AssemblyEngine::execute).

use glam::Vec2;

/// A request from the UI shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    // ── Choreography ────────────────────────────────────────────────
    /// Open the assembly up. Ignored unless assembled.
    Disassemble,

    /// Put the assembly back together. Ignored unless disassembled.
    Assemble,

    // ── Selection ───────────────────────────────────────────────────
    /// Select the part under a pointer position (physical pixels, origin
    /// top-left).
    SelectAt {
        /// Horizontal pixel.
        x: i32,
        /// Vertical pixel.
        y: i32,
    },

    /// Clear the current selection.
    ClearSelection,

    // ── Camera ──────────────────────────────────────────────────────
    /// Return the camera to its home pose.
    ResetView,

    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// The host viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
