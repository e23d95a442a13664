//! Asset loading.
//!
//! Only plain-text shader sources are loaded here; mesh import is an
//! external collaborator's job and arrives as already-parsed `MeshData`.

mod source;

pub use source::{load_shader_pair, AssetError, ShaderPair};
