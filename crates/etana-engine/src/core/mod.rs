//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! application: a per-frame context carrying input, timing, and the GPU
//! handle, plus the `App` trait the frame driver implements.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
