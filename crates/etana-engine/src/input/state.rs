use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseWheelDelta};

/// Nominal pixels per scroll line, used to fold high-precision pixel deltas
/// into the line-based zoom contract.
const PIXELS_PER_LINE: f32 = 40.0;

/// Converts absolute cursor samples into movement deltas.
///
/// The first sample after construction or `reset()` only latches the
/// position and yields a zero delta, so (re)activation never injects a
/// spurious jump from an arbitrary starting position.
#[derive(Debug, Default)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    /// Feeds one absolute sample and returns the `(dx, dy)` delta.
    ///
    /// The y delta is flipped so that moving the mouse up is positive,
    /// matching the pitch-offset convention.
    pub fn sample(&mut self, x: f64, y: f64) -> (f32, f32) {
        let delta = match self.last {
            None => (0.0, 0.0),
            Some((lx, ly)) => ((x - lx) as f32, (ly - y) as f32),
        };
        self.last = Some((x, y));
        delta
    }

    /// Drops the latched position; the next sample yields a zero delta.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Current input state for the window.
///
/// Holds "is down" information for key-state polling. Per-frame deltas are
/// accumulated into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    cursor: CursorTracker,
}

impl InputState {
    /// Applies a platform-agnostic input event and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear "down" state so keys don't stick,
                    // and drop the cursor latch so regaining focus starts
                    // from a fresh first sample.
                    self.keys_down.clear();
                    self.cursor.reset();
                }
            }

            InputEvent::CursorMoved { x, y } => {
                let (dx, dy) = self.cursor.sample(x, y);
                frame.add_cursor_delta(dx, dy);
            }

            InputEvent::MouseDelta { dx, dy } => {
                // Already relative; bypasses the tracker. Flip y so up is
                // positive, same convention as the absolute path.
                frame.add_cursor_delta(dx as f32, -(dy as f32));
            }

            InputEvent::CursorLeft => {
                self.cursor.reset();
            }

            InputEvent::Key { key, state, repeat } => {
                if repeat {
                    return;
                }
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(key) {
                            frame.keys_pressed.insert(key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(&key) {
                            frame.keys_released.insert(key);
                        }
                    }
                }
            }

            InputEvent::Scroll(delta) => {
                let lines = match delta {
                    MouseWheelDelta::Line { y } => y,
                    MouseWheelDelta::Pixel { y } => y / PIXELS_PER_LINE,
                };
                frame.add_scroll_lines(lines);
            }
        }
    }

    /// Polled key-state query, used by the frame driver for movement keys.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── cursor tracker ────────────────────────────────────────────────────

    #[test]
    fn first_sample_yields_zero_delta() {
        let mut t = CursorTracker::default();
        assert_eq!(t.sample(417.0, 283.0), (0.0, 0.0));
    }

    #[test]
    fn subsequent_samples_yield_deltas() {
        let mut t = CursorTracker::default();
        t.sample(100.0, 100.0);
        assert_eq!(t.sample(103.0, 98.0), (3.0, 2.0));
    }

    #[test]
    fn y_delta_is_flipped() {
        // Window y grows downward; moving the mouse down must be negative.
        let mut t = CursorTracker::default();
        t.sample(0.0, 0.0);
        let (_, dy) = t.sample(0.0, 5.0);
        assert_eq!(dy, -5.0);
    }

    #[test]
    fn reset_reinstates_the_latch() {
        let mut t = CursorTracker::default();
        t.sample(10.0, 10.0);
        t.reset();
        assert_eq!(t.sample(900.0, 900.0), (0.0, 0.0));
    }

    // ── state / frame accumulation ────────────────────────────────────────

    #[test]
    fn cursor_moves_accumulate_into_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        state.apply_event(&mut frame, InputEvent::CursorMoved { x: 4.0, y: -1.0 });
        state.apply_event(&mut frame, InputEvent::CursorMoved { x: 6.0, y: -3.0 });

        assert_eq!(frame.cursor_dx, 6.0);
        assert_eq!(frame.cursor_dy, 4.0);
    }

    #[test]
    fn raw_motion_bypasses_the_position_latch() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        // No absolute sample has latched; relative motion must still land.
        state.apply_event(&mut frame, InputEvent::MouseDelta { dx: 3.0, dy: 2.0 });
        state.apply_event(&mut frame, InputEvent::MouseDelta { dx: 1.0, dy: -1.0 });

        assert_eq!(frame.cursor_dx, 4.0);
        // Device y grows downward; net 1 unit down must read as -1.
        assert_eq!(frame.cursor_dy, -1.0);
    }

    #[test]
    fn raw_motion_does_not_disturb_the_latch() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::MouseDelta { dx: 50.0, dy: 50.0 });
        frame.clear();

        // The first absolute sample afterwards still only latches.
        state.apply_event(&mut frame, InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        assert_eq!((frame.cursor_dx, frame.cursor_dy), (0.0, 0.0));
    }

    #[test]
    fn scroll_lines_accumulate_across_units() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Scroll(MouseWheelDelta::Line { y: 1.0 }));
        state.apply_event(&mut frame, InputEvent::Scroll(MouseWheelDelta::Pixel { y: 80.0 }));

        assert_eq!(frame.scroll_lines, 3.0);
    }

    #[test]
    fn key_repeat_does_not_retrigger_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let press = InputEvent::Key { key: Key::W, state: KeyState::Pressed, repeat: false };
        let rep = InputEvent::Key { key: Key::W, state: KeyState::Pressed, repeat: true };

        state.apply_event(&mut frame, press);
        frame.clear();
        state.apply_event(&mut frame, rep);

        assert!(frame.keys_pressed.is_empty());
        assert!(state.key_down(Key::W));
    }

    #[test]
    fn focus_loss_clears_held_keys_and_latch() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::CursorMoved { x: 50.0, y: 50.0 });
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::D, state: KeyState::Pressed, repeat: false },
        );
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.key_down(Key::D));

        // The next sample after refocus must not produce a jump.
        frame.clear();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, InputEvent::CursorMoved { x: 700.0, y: 12.0 });
        assert_eq!((frame.cursor_dx, frame.cursor_dy), (0.0, 0.0));
    }
}
