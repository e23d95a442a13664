//! GPU rendering subsystem.
//!
//! The draw path is a single pipeline drawing a single indexed triangle-list
//! mesh. `ShaderProgram` owns the compiled/linked pipeline and its uniform
//! block; `MeshBuffer` owns the vertex/index buffers. Both operate through a
//! caller-provided render pass, so no binding state leaks between frames.

mod ctx;
mod error;
mod mesh;
mod program;

pub use ctx::RenderCtx;
pub use error::{MeshError, ProgramError, ShaderStage};
pub use mesh::{MeshBuffer, MeshData, Vertex};
pub use program::{SceneUniforms, ShaderProgram};
