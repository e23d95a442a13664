//! Etana engine crate.
//!
//! Owns the platform + GPU runtime pieces for a single-window, single-mesh
//! 3D viewer: device/surface management, input accumulation, frame timing,
//! the fly camera, and the shader-program / mesh-buffer draw path.

pub mod assets;
pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod render;
pub mod time;
pub mod window;

pub mod logging;
