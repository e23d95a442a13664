use std::collections::HashSet;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, focus). `InputFrame`
/// accumulates the discrete deltas of the current frame; the frame driver
/// drains it exactly once per frame, then calls `clear()`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Accumulated cursor movement since the last drain, in pixels.
    ///
    /// Sign convention matches camera yaw/pitch offsets: +x is rightward,
    /// +y is upward (window y is flipped at accumulation time).
    pub cursor_dx: f32,
    pub cursor_dy: f32,

    /// Accumulated scroll since the last drain, in lines.
    pub scroll_lines: f32,

    /// Keys pressed this frame (transition edges, not held state).
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.cursor_dx = 0.0;
        self.cursor_dy = 0.0;
        self.scroll_lines = 0.0;
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub(crate) fn add_cursor_delta(&mut self, dx: f32, dy: f32) {
        self.cursor_dx += dx;
        self.cursor_dy += dy;
    }

    pub(crate) fn add_scroll_lines(&mut self, lines: f32) {
        self.scroll_lines += lines;
    }
}
