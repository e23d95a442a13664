//! Camera state.
//!
//! A single fly camera owned by the frame driver: discrete input deltas in,
//! view/projection matrices out. No GPU coupling.

mod fly;

pub use fly::{CameraMovement, FlyCamera};
