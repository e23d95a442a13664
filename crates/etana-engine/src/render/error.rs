use std::fmt;

/// Shader pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Failure while building a `ShaderProgram`.
///
/// Both variants carry the compiler's full diagnostic text. Neither is fatal
/// to the process; the caller decides whether to abort.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramError {
    /// One stage failed to compile. Linking is not attempted.
    Compile {
        stage: ShaderStage,
        diagnostic: String,
    },
    /// Both stages compiled but pipeline creation failed.
    Link { diagnostic: String },
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::Compile { stage, diagnostic } => {
                write!(f, "{stage} shader compilation failed:\n{diagnostic}")
            }
            ProgramError::Link { diagnostic } => {
                write!(f, "shader program linking failed:\n{diagnostic}")
            }
        }
    }
}

impl std::error::Error for ProgramError {}

/// Failure while constructing or updating a `MeshBuffer`.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// An index refers past the end of the vertex sequence. Caught before
    /// upload; an out-of-range index is undefined at the GPU level.
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// A position re-upload did not match the original vertex count.
    PositionCountMismatch { expected: usize, got: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IndexOutOfRange { index, vertex_count } => write!(
                f,
                "mesh index {index} out of range for {vertex_count} vertices"
            ),
            MeshError::PositionCountMismatch { expected, got } => write!(
                f,
                "position count mismatch: mesh has {expected} vertices, got {got} positions"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
