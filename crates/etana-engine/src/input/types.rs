/// Keyboard key identifier.
///
/// Intentionally minimal: movement keys, modifiers, and letters cover the
/// viewer's bindings. For unsupported keys, `Key::Unknown(u32)` carries a
/// stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    Shift,
    Control,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high
/// precision. `InputState` normalizes both into lines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { y: f32 },
    Pixel { y: f32 },
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    /// Absolute cursor position sample in physical pixels.
    ///
    /// Deltas are derived internally; see `CursorTracker`.
    CursorMoved { x: f64, y: f64 },

    /// Raw relative mouse motion, in device units (y grows downward).
    ///
    /// Emitted while the cursor is grabbed: under a locked or confined
    /// cursor the absolute position freezes or saturates at the window
    /// border, so only relative motion carries look input.
    MouseDelta { dx: f64, dy: f64 },

    /// Cursor left the window surface.
    CursorLeft,

    Scroll(MouseWheelDelta),

    /// Window focus change.
    Focused(bool),
}
