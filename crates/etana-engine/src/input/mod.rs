//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s; those only
//! accumulate into an `InputFrame`, which the frame driver drains once per
//! frame. Nothing here mutates camera state directly, so camera updates do
//! not depend on callback ordering relative to the draw step.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::{CursorTracker, InputState};
pub use types::{InputEvent, Key, KeyState, MouseWheelDelta};
