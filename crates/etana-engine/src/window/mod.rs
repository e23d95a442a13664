//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single viewer window, and wires them to
//! the GPU layer and input accumulation.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
