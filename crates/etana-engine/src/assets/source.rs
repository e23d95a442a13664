use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A shader file could not be read.
///
/// Non-fatal at this layer: the caller gets no usable source and decides
/// fatality itself (the viewer treats it as fatal — compiling an empty
/// string in place of a missing file helps no one).
#[derive(Debug)]
pub struct AssetError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The two stage sources of one program, read fully into memory.
#[derive(Debug, Clone)]
pub struct ShaderPair {
    pub vertex: String,
    pub fragment: String,
}

/// Reads a vertex/fragment source pair from disk.
///
/// No preprocessing is applied; the GPU compiler sees the files verbatim.
pub fn load_shader_pair(
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<ShaderPair, AssetError> {
    Ok(ShaderPair {
        vertex: read_source(vertex_path.as_ref())?,
        fragment: read_source(fragment_path.as_ref())?,
    })
}

fn read_source(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_shader_pair("/nonexistent/shader.vert.wgsl", "/nonexistent/shader.frag.wgsl")
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shader.vert.wgsl"));
    }

    #[test]
    fn pair_is_read_verbatim() {
        let dir = std::env::temp_dir().join("etana-shader-pair-test");
        std::fs::create_dir_all(&dir).unwrap();
        let vs = dir.join("a.vert.wgsl");
        let fs = dir.join("a.frag.wgsl");
        std::fs::write(&vs, "// vertex\n").unwrap();
        std::fs::write(&fs, "// fragment\n").unwrap();

        let pair = load_shader_pair(&vs, &fs).unwrap();
        assert_eq!(pair.vertex, "// vertex\n");
        assert_eq!(pair.fragment, "// fragment\n");
    }

    #[test]
    fn first_missing_stage_wins() {
        let dir = std::env::temp_dir().join("etana-shader-pair-test-2");
        std::fs::create_dir_all(&dir).unwrap();
        let fs = dir.join("only.frag.wgsl");
        std::fs::write(&fs, "// fragment\n").unwrap();

        let err = load_shader_pair(dir.join("missing.vert.wgsl"), &fs).unwrap_err();
        assert!(err.path.ends_with("missing.vert.wgsl"));
    }
}
